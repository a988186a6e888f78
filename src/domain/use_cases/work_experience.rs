use validator::Validate;

use crate::{
    entities::work_experience::{WorkExperience, WorkExperienceData},
    errors::AppError,
    repositories::work_experience::WorkExperienceRepository,
};

pub struct WorkExperienceHandler<R>
where
    R: WorkExperienceRepository,
{
    pub repo: R,
}

impl<R> WorkExperienceHandler<R>
where
    R: WorkExperienceRepository,
{
    pub fn new(repo: R) -> Self {
        WorkExperienceHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<WorkExperience>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<WorkExperience, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("WorkExperience not found: {id}")))
    }

    pub async fn create(&self, data: WorkExperienceData) -> Result<WorkExperience, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    pub async fn update(
        &self,
        id: i64,
        data: WorkExperienceData,
    ) -> Result<WorkExperience, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("WorkExperience not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Cannot delete, WorkExperience not found: {id}"
            )))
        }
    }
}
