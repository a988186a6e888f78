use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use portfolio_api::{
    entities::introduction::{Introduction, IntroductionData, SINGLETON_ID},
    errors::AppError,
    repositories::introduction::IntroductionRepository,
    use_cases::introduction::IntroductionHandler,
};

mock! {
    IntroductionRepo {}

    #[async_trait]
    impl IntroductionRepository for IntroductionRepo {
        async fn get_or_create(&self, today: NaiveDate) -> Result<Introduction, AppError>;
        async fn upsert_content(
            &self,
            content: &str,
            today: NaiveDate,
        ) -> Result<Introduction, AppError>;
    }
}

#[actix_rt::test]
async fn repeated_reads_return_the_same_singleton() {
    let mut repo = MockIntroductionRepo::new();
    repo.expect_get_or_create().times(2).returning(|today| {
        Ok(Introduction {
            id: SINGLETON_ID,
            content: "".into(),
            last_updated: today,
        })
    });

    let handler = IntroductionHandler::new(repo);

    let first = handler.get().await.unwrap();
    let second = handler.get().await.unwrap();

    assert_eq!(first.id, SINGLETON_ID);
    assert_eq!(first.id, second.id);
}

#[actix_rt::test]
async fn update_overwrites_content_and_stamps_the_date() {
    let mut repo = MockIntroductionRepo::new();
    repo.expect_upsert_content()
        .withf(|content, _today| content == "Hello, I build backends.")
        .times(1)
        .returning(|content, today| {
            Ok(Introduction {
                id: SINGLETON_ID,
                content: content.to_string(),
                last_updated: today,
            })
        });

    let handler = IntroductionHandler::new(repo);
    let updated = handler
        .update(IntroductionData {
            content: "Hello, I build backends.".into(),
        })
        .await
        .unwrap();

    assert_eq!(updated.content, "Hello, I build backends.");
}
