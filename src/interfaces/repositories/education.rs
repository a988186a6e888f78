use async_trait::async_trait;

use crate::{
    entities::education::{Education, EducationData},
    errors::AppError,
    repositories::sqlx_repo::SqlxEducationRepo,
};

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Education>, AppError>;
    async fn insert(&self, data: &EducationData) -> Result<Education, AppError>;
    async fn update(&self, id: i64, data: &EducationData) -> Result<Option<Education>, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxEducationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEducationRepo { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepo {
    async fn find_all(&self) -> Result<Vec<Education>, AppError> {
        let educations = sqlx::query_as::<_, Education>("SELECT * FROM educations")
            .fetch_all(&self.pool)
            .await?;

        Ok(educations)
    }

    async fn insert(&self, data: &EducationData) -> Result<Education, AppError> {
        let education = sqlx::query_as::<_, Education>(
            r#"
            INSERT INTO educations (school, degree, level, start_date, end_date, city, district, gpa)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.school)
        .bind(&data.degree)
        .bind(&data.level)
        .bind(&data.start_date)
        .bind(&data.end_date)
        .bind(&data.city)
        .bind(&data.district)
        .bind(&data.gpa)
        .fetch_one(&self.pool)
        .await?;

        Ok(education)
    }

    async fn update(&self, id: i64, data: &EducationData) -> Result<Option<Education>, AppError> {
        let education = sqlx::query_as::<_, Education>(
            r#"
            UPDATE educations
            SET school = $1, degree = $2, level = $3, start_date = $4,
                end_date = $5, city = $6, district = $7, gpa = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&data.school)
        .bind(&data.degree)
        .bind(&data.level)
        .bind(&data.start_date)
        .bind(&data.end_date)
        .bind(&data.city)
        .bind(&data.district)
        .bind(&data.gpa)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(education)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
