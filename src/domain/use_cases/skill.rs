use validator::Validate;

use crate::{
    entities::skill::{Skill, SkillData},
    errors::AppError,
    repositories::{category::CategoryRepository, skill::SkillRepository},
};

pub struct SkillHandler<S, C>
where
    S: SkillRepository,
    C: CategoryRepository,
{
    pub skills: S,
    pub categories: C,
}

impl<S, C> SkillHandler<S, C>
where
    S: SkillRepository,
    C: CategoryRepository,
{
    pub fn new(skills: S, categories: C) -> Self {
        SkillHandler { skills, categories }
    }

    pub async fn list(&self) -> Result<Vec<Skill>, AppError> {
        self.skills.find_all().await
    }

    /// The referenced category must exist before anything is persisted;
    /// a dead `category_id` rejects the whole write.
    pub async fn create(&self, data: SkillData) -> Result<Skill, AppError> {
        data.validate()?;
        self.ensure_category_exists(data.category_id).await?;

        self.skills.insert(&data).await
    }

    pub async fn update(&self, id: i64, data: SkillData) -> Result<Skill, AppError> {
        data.validate()?;

        if self.skills.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Skill not found: {id}")));
        }
        self.ensure_category_exists(data.category_id).await?;

        self.skills
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Skill not found: {id}")))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.skills.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Skill not found: {id}")))
        }
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<(), AppError> {
        if self.categories.exists_by_id(category_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Category not found: {category_id}"
            )))
        }
    }
}
