use validator::Validate;

use crate::{
    entities::education::{Education, EducationData},
    errors::AppError,
    repositories::education::EducationRepository,
};

pub struct EducationHandler<R>
where
    R: EducationRepository,
{
    pub repo: R,
}

impl<R> EducationHandler<R>
where
    R: EducationRepository,
{
    pub fn new(repo: R) -> Self {
        EducationHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<Education>, AppError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, data: EducationData) -> Result<Education, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    pub async fn update(&self, id: i64, data: EducationData) -> Result<Education, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Education not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Education not found: {id}")))
        }
    }
}
