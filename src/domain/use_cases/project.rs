use validator::Validate;

use crate::{
    entities::project::{Project, ProjectData},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        ProjectHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Project, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project not found: {id}")))
    }

    pub async fn create(&self, data: ProjectData) -> Result<Project, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    pub async fn update(&self, id: i64, data: ProjectData) -> Result<Project, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Project not found: {id}")))
        }
    }
}
