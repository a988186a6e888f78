use async_trait::async_trait;

use crate::{
    entities::award::{Award, AwardData},
    errors::AppError,
    repositories::sqlx_repo::SqlxAwardRepo,
};

#[async_trait]
pub trait AwardRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Award>, AppError>;
    async fn insert(&self, data: &AwardData) -> Result<Award, AppError>;
    async fn update(&self, id: i64, data: &AwardData) -> Result<Option<Award>, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxAwardRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAwardRepo { pool }
    }
}

#[async_trait]
impl AwardRepository for SqlxAwardRepo {
    async fn find_all(&self) -> Result<Vec<Award>, AppError> {
        let awards = sqlx::query_as::<_, Award>("SELECT * FROM awards")
            .fetch_all(&self.pool)
            .await?;

        Ok(awards)
    }

    async fn insert(&self, data: &AwardData) -> Result<Award, AppError> {
        let award = sqlx::query_as::<_, Award>(
            r#"
            INSERT INTO awards (name, description, date, image_url)
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

        Ok(award)
    }

    async fn update(&self, id: i64, data: &AwardData) -> Result<Option<Award>, AppError> {
        let award = sqlx::query_as::<_, Award>(
            r#"
            UPDATE awards
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

        Ok(award)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
