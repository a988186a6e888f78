use validator::Validate;

use crate::{
    entities::activity::{Activity, ActivityData},
    errors::AppError,
    repositories::activity::ActivityRepository,
};

pub struct ActivityHandler<R>
where
    R: ActivityRepository,
{
    pub repo: R,
}

impl<R> ActivityHandler<R>
where
    R: ActivityRepository,
{
    pub fn new(repo: R) -> Self {
        ActivityHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<Activity>, AppError> {
        self.repo.find_all().await
    }

    pub async fn create(&self, data: ActivityData) -> Result<Activity, AppError> {
        data.validate()?;

        self.repo.insert(&data).await
    }

    /// Overwrites every mutable field; never creates a row for an unknown id.
    pub async fn update(&self, id: i64, data: ActivityData) -> Result<Activity, AppError> {
        data.validate()?;

        self.repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Activity not found: {id}")))
        }
    }
}
