use chrono::Utc;

use crate::{
    entities::introduction::{Introduction, IntroductionData},
    errors::AppError,
    repositories::introduction::IntroductionRepository,
};

pub struct IntroductionHandler<R>
where
    R: IntroductionRepository,
{
    pub repo: R,
}

impl<R> IntroductionHandler<R>
where
    R: IntroductionRepository,
{
    pub fn new(repo: R) -> Self {
        IntroductionHandler { repo }
    }

    /// The one non-pure read in the system: the singleton row is created
    /// with empty content on first access.
    pub async fn get(&self) -> Result<Introduction, AppError> {
        self.repo.get_or_create(Utc::now().date_naive()).await
    }

    pub async fn update(&self, data: IntroductionData) -> Result<Introduction, AppError> {
        self.repo
            .upsert_content(&data.content, Utc::now().date_naive())
            .await
    }
}
