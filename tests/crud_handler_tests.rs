use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::*;

use portfolio_api::{
    entities::activity::{Activity, ActivityData},
    entities::education::{Education, EducationData},
    entities::work_experience::{WorkExperience, WorkExperienceData},
    errors::AppError,
    repositories::activity::ActivityRepository,
    repositories::education::EducationRepository,
    repositories::work_experience::WorkExperienceRepository,
    use_cases::activity::ActivityHandler,
    use_cases::education::EducationHandler,
    use_cases::work_experience::WorkExperienceHandler,
};

mock! {
    ActivityRepo {}

    #[async_trait]
    impl ActivityRepository for ActivityRepo {
        async fn find_all(&self) -> Result<Vec<Activity>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, AppError>;
        async fn insert(&self, data: &ActivityData) -> Result<Activity, AppError>;
        async fn update(&self, id: i64, data: &ActivityData) -> Result<Option<Activity>, AppError>;
        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
    }
}

mock! {
    EducationRepo {}

    #[async_trait]
    impl EducationRepository for EducationRepo {
        async fn find_all(&self) -> Result<Vec<Education>, AppError>;
        async fn insert(&self, data: &EducationData) -> Result<Education, AppError>;
        async fn update(&self, id: i64, data: &EducationData) -> Result<Option<Education>, AppError>;
        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
    }
}

mock! {
    WorkExperienceRepo {}

    #[async_trait]
    impl WorkExperienceRepository for WorkExperienceRepo {
        async fn find_all(&self) -> Result<Vec<WorkExperience>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<WorkExperience>, AppError>;
        async fn insert(&self, data: &WorkExperienceData) -> Result<WorkExperience, AppError>;
        async fn update(
            &self,
            id: i64,
            data: &WorkExperienceData,
        ) -> Result<Option<WorkExperience>, AppError>;
        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
    }
}

fn activity_data() -> ActivityData {
    ActivityData {
        title: "Hackathon".into(),
        description: Some("48h team event".into()),
        date: Some("2023/05/15".into()),
        image_url: None,
    }
}

fn education_data() -> EducationData {
    EducationData {
        school: "National University".into(),
        degree: Some("BSc".into()),
        level: Some("Bachelor".into()),
        start_date: Some("2019".into()),
        end_date: Some("2023".into()),
        city: None,
        district: None,
        gpa: Some("3.8".into()),
    }
}

#[actix_rt::test]
async fn create_returns_server_assigned_identity() {
    let mut repo = MockActivityRepo::new();
    repo.expect_insert().times(1).returning(|data| {
        Ok(Activity {
            id: 42,
            title: data.title.clone(),
            description: data.description.clone(),
            date: data.date.clone(),
            image_url: data.image_url.clone(),
        })
    });

    let handler = ActivityHandler::new(repo);
    let created = handler.create(activity_data()).await.unwrap();

    assert_eq!(created.id, 42);
    assert_eq!(created.title, "Hackathon");
}

#[actix_rt::test]
async fn create_with_empty_title_is_rejected_before_persisting() {
    // no insert expectation: the mock panics if the handler reaches storage
    let repo = MockActivityRepo::new();

    let handler = ActivityHandler::new(repo);
    let mut data = activity_data();
    data.title = "".into();

    let err = handler.create(data).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[actix_rt::test]
async fn update_overwrites_every_field() {
    let mut repo = MockActivityRepo::new();
    repo.expect_update()
        .with(eq(7), always())
        .times(1)
        .returning(|id, data| {
            Ok(Some(Activity {
                id,
                title: data.title.clone(),
                description: data.description.clone(),
                date: data.date.clone(),
                image_url: data.image_url.clone(),
            }))
        });

    let handler = ActivityHandler::new(repo);
    let mut data = activity_data();
    data.description = None;

    let updated = handler.update(7, data).await.unwrap();
    assert_eq!(updated.id, 7);
    assert_eq!(updated.description, None);
}

#[actix_rt::test]
async fn update_of_absent_id_reports_not_found() {
    let mut repo = MockEducationRepo::new();
    repo.expect_update()
        .with(eq(999), always())
        .times(1)
        .returning(|_, _| Ok(None));

    let handler = EducationHandler::new(repo);
    let err = handler.update(999, education_data()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn delete_of_absent_id_reports_not_found() {
    let mut repo = MockActivityRepo::new();
    repo.expect_delete_by_id()
        .with(eq(5))
        .times(1)
        .returning(|_| Ok(false));

    let handler = ActivityHandler::new(repo);
    let err = handler.delete(5).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn list_with_zero_records_returns_empty_collection() {
    let mut repo = MockEducationRepo::new();
    repo.expect_find_all().times(1).returning(|| Ok(Vec::new()));

    let handler = EducationHandler::new(repo);
    let educations = handler.list().await.unwrap();

    assert!(educations.is_empty());
}

#[actix_rt::test]
async fn experience_delete_checks_existence_first() {
    let mut repo = MockWorkExperienceRepo::new();
    repo.expect_delete_by_id()
        .with(eq(3))
        .times(1)
        .returning(|_| Ok(false));

    let handler = WorkExperienceHandler::new(repo);
    let err = handler.delete(3).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert!(msg.contains("Cannot delete")),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[actix_rt::test]
async fn experience_get_by_id_returns_the_row() {
    let mut repo = MockWorkExperienceRepo::new();
    repo.expect_find_by_id().with(eq(1)).returning(|id| {
        Ok(Some(WorkExperience {
            id,
            company: "Acme".into(),
            position: "Engineer".into(),
            logo_url: None,
            start_date: Some("2021/01".into()),
            end_date: None,
            location: Some("Taipei".into()),
            description: None,
            skills: vec!["Rust".into(), "Postgres".into()],
        }))
    });

    let handler = WorkExperienceHandler::new(repo);
    let experience = handler.get_by_id(1).await.unwrap();

    assert_eq!(experience.company, "Acme");
    assert_eq!(experience.skills.len(), 2);
}
