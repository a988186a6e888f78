use validator::Validate;

use crate::{
    entities::certification::{Certification, CertificationData},
    errors::AppError,
    repositories::certification::CertificationRepository,
};

pub struct CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub repo: R,
}

impl<R> CertificationHandler<R>
where
    R: CertificationRepository,
{
    pub fn new(repo: R) -> Self {
        CertificationHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<Certification>, AppError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, data: CertificationData) -> Result<Certification, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    pub async fn update(&self, id: i64, data: CertificationData) -> Result<Certification, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Certification not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Certification not found: {id}")))
        }
    }
}
