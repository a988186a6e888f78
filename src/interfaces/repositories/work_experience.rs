use async_trait::async_trait;

use crate::{
    entities::work_experience::{WorkExperience, WorkExperienceData},
    errors::AppError,
    repositories::sqlx_repo::SqlxWorkExperienceRepo,
};

#[async_trait]
pub trait WorkExperienceRepository: Send + Sync {
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

impl SqlxWorkExperienceRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxWorkExperienceRepo { pool }
    }
}

#[async_trait]
impl WorkExperienceRepository for SqlxWorkExperienceRepo {
    async fn find_all(&self) -> Result<Vec<WorkExperience>, AppError> {
        let experiences = sqlx::query_as::<_, WorkExperience>("SELECT * FROM work_experiences")
            .fetch_all(&self.pool)
            .await?;

        Ok(experiences)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<WorkExperience>, AppError> {
        let experience =
            sqlx::query_as::<_, WorkExperience>("SELECT * FROM work_experiences WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(experience)
    }

    async fn insert(&self, data: &WorkExperienceData) -> Result<WorkExperience, AppError> {
        let experience = sqlx::query_as::<_, WorkExperience>(
            r#"
            INSERT INTO work_experiences
                (company, position, logo_url, start_date, end_date, location, description, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.company)
        .bind(&data.position)
        .bind(&data.logo_url)
        .bind(&data.start_date)
        .bind(&data.end_date)
        .bind(&data.location)
        .bind(&data.description)
        .bind(&data.skills)
        .fetch_one(&self.pool)
        .await?;

        Ok(experience)
    }

    async fn update(
        &self,
        id: i64,
        data: &WorkExperienceData,
    ) -> Result<Option<WorkExperience>, AppError> {
        let experience = sqlx::query_as::<_, WorkExperience>(
            r#"
            UPDATE work_experiences
            SET company = $1, position = $2, logo_url = $3, start_date = $4,
                end_date = $5, location = $6, description = $7, skills = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&data.company)
        .bind(&data.position)
        .bind(&data.logo_url)
        .bind(&data.start_date)
        .bind(&data.end_date)
        .bind(&data.location)
        .bind(&data.description)
        .bind(&data.skills)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(experience)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM work_experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
