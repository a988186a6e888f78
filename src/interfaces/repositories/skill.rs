use async_trait::async_trait;

use crate::{
    entities::skill::{Skill, SkillData},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Skill>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, AppError>;

    /// Skills owned by one category, used to build the owning-collection
    /// view of that category.
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Skill>, AppError>;

    async fn insert(&self, data: &SkillData) -> Result<Skill, AppError>;

    async fn update(&self, id: i64, data: &SkillData) -> Result<Option<Skill>, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn find_all(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, AppError> {
        let skill = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(skill)
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE category_id = $1")
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn insert(&self, data: &SkillData) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, description, category_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn update(&self, id: i64, data: &SkillData) -> Result<Option<Skill>, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = $1, description = $2, category_id = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
