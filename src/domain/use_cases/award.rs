use validator::Validate;

use crate::{
    entities::award::{Award, AwardData},
    errors::AppError,
    repositories::award::AwardRepository,
};

pub struct AwardHandler<R>
where
    R: AwardRepository,
{
    pub repo: R,
}

impl<R> AwardHandler<R>
where
    R: AwardRepository,
{
    pub fn new(repo: R) -> Self {
        AwardHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<Award>, AppError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, data: AwardData) -> Result<Award, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    pub async fn update(&self, id: i64, data: AwardData) -> Result<Award, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Award not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Award not found: {id}")))
        }
    }
}
