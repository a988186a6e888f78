use std::collections::HashMap;

use validator::Validate;

use crate::{
    entities::category::{CategoryData, CategoryWithSkills},
    entities::skill::Skill,
    errors::AppError,
    repositories::{category::CategoryRepository, skill::SkillRepository},
};

/// Owns the category side of the category–skill aggregate. Every response
/// is the owning-collection view: the category plus the skills it owns.
pub struct CategoryHandler<C, S>
where
    C: CategoryRepository,
    S: SkillRepository,
{
    pub categories: C,
    pub skills: S,
}

impl<C, S> CategoryHandler<C, S>
where
    C: CategoryRepository,
    S: SkillRepository,
{
    pub fn new(categories: C, skills: S) -> Self {
        CategoryHandler { categories, skills }
    }

    pub async fn list(&self) -> Result<Vec<CategoryWithSkills>, AppError> {
        let categories = self.categories.find_all().await?;
        let skills = self.skills.find_all().await?;

        let mut by_category: HashMap<i64, Vec<Skill>> = HashMap::new();
        for skill in skills {
            by_category.entry(skill.category_id).or_default().push(skill);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let owned = by_category.remove(&category.id).unwrap_or_default();
                CategoryWithSkills::new(category, owned)
            })
            .collect())
    }

    /// A freshly created category owns no skills yet.
    pub async fn create(&self, data: CategoryData) -> Result<CategoryWithSkills, AppError> {
        data.validate()?;

        let category = self.categories.insert(&data).await?;

        Ok(CategoryWithSkills::new(category, Vec::new()))
    }

    pub async fn update(&self, id: i64, data: CategoryData) -> Result<CategoryWithSkills, AppError> {
        data.validate()?;

        let category = self
            .categories
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category not found: {id}")))?;

        let owned = self.skills.find_by_category(category.id).await?;

        Ok(CategoryWithSkills::new(category, owned))
    }

    /// Deleting a category removes every skill it owns; the cascade is a
    /// storage constraint, no orphan can survive it.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.categories.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Category not found: {id}")))
        }
    }
}
