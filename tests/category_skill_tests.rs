use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::*;

use portfolio_api::{
    entities::category::{Category, CategoryData},
    entities::skill::{Skill, SkillData},
    errors::AppError,
    repositories::{category::CategoryRepository, skill::SkillRepository},
    use_cases::{category::CategoryHandler, skill::SkillHandler},
};

mock! {
    CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn find_all(&self) -> Result<Vec<Category>, AppError>;
        async fn insert(&self, data: &CategoryData) -> Result<Category, AppError>;
        async fn update(&self, id: i64, data: &CategoryData) -> Result<Option<Category>, AppError>;
        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
        async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
    }
}

mock! {
    SkillRepo {}

    #[async_trait]
    impl SkillRepository for SkillRepo {
        async fn find_all(&self) -> Result<Vec<Skill>, AppError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, AppError>;
        async fn find_by_category(&self, category_id: i64) -> Result<Vec<Skill>, AppError>;
        async fn insert(&self, data: &SkillData) -> Result<Skill, AppError>;
        async fn update(&self, id: i64, data: &SkillData) -> Result<Option<Skill>, AppError>;
        async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
    }
}

fn skill(id: i64, name: &str, category_id: i64) -> Skill {
    Skill {
        id,
        name: name.into(),
        description: None,
        category_id,
    }
}

fn skill_data(category_id: i64) -> SkillData {
    SkillData {
        name: "Go".into(),
        description: Some("".into()),
        category_id,
    }
}

#[actix_rt::test]
async fn creating_skill_with_dead_category_fails_without_persisting() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_exists_by_id()
        .with(eq(99))
        .times(1)
        .returning(|_| Ok(false));

    // no insert expectation: reaching storage would panic the mock
    let skills = MockSkillRepo::new();

    let handler = SkillHandler::new(skills, categories);
    let err = handler.create(skill_data(99)).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert!(msg.contains("Category not found")),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[actix_rt::test]
async fn creating_skill_with_live_category_persists() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_exists_by_id()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(true));

    let mut skills = MockSkillRepo::new();
    skills.expect_insert().times(1).returning(|data| {
        Ok(Skill {
            id: 1,
            name: data.name.clone(),
            description: data.description.clone(),
            category_id: data.category_id,
        })
    });

    let handler = SkillHandler::new(skills, categories);
    let created = handler.create(skill_data(1)).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.category_id, 1);
}

#[actix_rt::test]
async fn updating_absent_skill_reports_not_found() {
    let categories = MockCategoryRepo::new();

    let mut skills = MockSkillRepo::new();
    skills
        .expect_find_by_id()
        .with(eq(404))
        .times(1)
        .returning(|_| Ok(None));

    let handler = SkillHandler::new(skills, categories);
    let err = handler.update(404, skill_data(1)).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert!(msg.contains("Skill not found")),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[actix_rt::test]
async fn moving_skill_to_dead_category_is_rejected() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_exists_by_id()
        .with(eq(99))
        .times(1)
        .returning(|_| Ok(false));

    let mut skills = MockSkillRepo::new();
    skills
        .expect_find_by_id()
        .with(eq(1))
        .times(1)
        .returning(|id| Ok(Some(skill(id, "Go", 1))));

    let handler = SkillHandler::new(skills, categories);
    let err = handler.update(1, skill_data(99)).await.unwrap_err();

    match err {
        AppError::NotFound(msg) => assert!(msg.contains("Category not found")),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[actix_rt::test]
async fn category_list_groups_owned_skills() {
    let mut categories = MockCategoryRepo::new();
    categories.expect_find_all().times(1).returning(|| {
        Ok(vec![
            Category {
                id: 1,
                name: "Languages".into(),
            },
            Category {
                id: 2,
                name: "Tools".into(),
            },
        ])
    });

    let mut skills = MockSkillRepo::new();
    skills.expect_find_all().times(1).returning(|| {
        Ok(vec![
            skill(1, "Go", 1),
            skill(2, "Rust", 1),
            skill(3, "Docker", 2),
        ])
    });

    let handler = CategoryHandler::new(categories, skills);
    let views = handler.list().await.unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].skills.len(), 2);
    assert_eq!(views[1].skills.len(), 1);
    assert_eq!(views[1].skills[0].name, "Docker");
}

#[actix_rt::test]
async fn created_category_owns_no_skills() {
    let mut categories = MockCategoryRepo::new();
    categories.expect_insert().times(1).returning(|data| {
        Ok(Category {
            id: 1,
            name: data.name.clone(),
        })
    });

    let skills = MockSkillRepo::new();

    let handler = CategoryHandler::new(categories, skills);
    let created = handler
        .create(CategoryData {
            name: "Languages".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert!(created.skills.is_empty());
}

#[actix_rt::test]
async fn updating_absent_category_reports_not_found() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_update()
        .with(eq(404), always())
        .times(1)
        .returning(|_, _| Ok(None));

    let skills = MockSkillRepo::new();

    let handler = CategoryHandler::new(categories, skills);
    let err = handler
        .update(
            404,
            CategoryData {
                name: "Renamed".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn deleting_absent_category_reports_not_found() {
    let mut categories = MockCategoryRepo::new();
    categories
        .expect_delete_by_id()
        .with(eq(404))
        .times(1)
        .returning(|_| Ok(false));

    let skills = MockSkillRepo::new();

    let handler = CategoryHandler::new(categories, skills);
    let err = handler.delete(404).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}
