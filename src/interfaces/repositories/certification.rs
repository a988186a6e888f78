use async_trait::async_trait;

use crate::{
    entities::certification::{Certification, CertificationData},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificationRepo,
};

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Certification>, AppError>;
    async fn insert(&self, data: &CertificationData) -> Result<Certification, AppError>;
    async fn update(
        &self,
        id: i64,
        data: &CertificationData,
    ) -> Result<Option<Certification>, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxCertificationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificationRepo { pool }
    }
}

#[async_trait]
impl CertificationRepository for SqlxCertificationRepo {
    async fn find_all(&self) -> Result<Vec<Certification>, AppError> {
        let certifications = sqlx::query_as::<_, Certification>("SELECT * FROM certifications")
            .fetch_all(&self.pool)
            .await?;

        Ok(certifications)
    }

    async fn insert(&self, data: &CertificationData) -> Result<Certification, AppError> {
        let certification = sqlx::query_as::<_, Certification>(
            r#"
            INSERT INTO certifications (name, description, date, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.date)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(certification)
    }

    async fn update(
        &self,
        id: i64,
        data: &CertificationData,
    ) -> Result<Option<Certification>, AppError> {
        let certification = sqlx::query_as::<_, Certification>(
            r#"
            UPDATE certifications
            SET name = $1, description = $2, date = $3, image_url = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.date)
        .bind(&data.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certification)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
