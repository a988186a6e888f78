use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    entities::introduction::{Introduction, SINGLETON_ID},
    errors::AppError,
    repositories::sqlx_repo::SqlxIntroductionRepo,
};

#[async_trait]
pub trait IntroductionRepository: Send + Sync {
    /// Returns the singleton row, creating an empty one dated `today` if
    /// it does not exist yet. Concurrent first reads are safe: the insert
    /// is a no-op when the row already exists.
    async fn get_or_create(&self, today: NaiveDate) -> Result<Introduction, AppError>;

    /// Overwrites the singleton's content and stamps `today`, creating
    /// the row if it was never read before.
    async fn upsert_content(
        &self,
        content: &str,
        today: NaiveDate,
    ) -> Result<Introduction, AppError>;
}

impl SqlxIntroductionRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxIntroductionRepo { pool }
    }
}

#[async_trait]
impl IntroductionRepository for SqlxIntroductionRepo {
    async fn get_or_create(&self, today: NaiveDate) -> Result<Introduction, AppError> {
        sqlx::query(
            r#"
            INSERT INTO introductions (id, content, last_updated)
            VALUES ($1, '', $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(today)
        .execute(&self.pool)
        .await?;

        let introduction =
            sqlx::query_as::<_, Introduction>("SELECT * FROM introductions WHERE id = $1")
                .bind(SINGLETON_ID)
                .fetch_one(&self.pool)
                .await?;

        Ok(introduction)
    }

    async fn upsert_content(
        &self,
        content: &str,
        today: NaiveDate,
    ) -> Result<Introduction, AppError> {
        let introduction = sqlx::query_as::<_, Introduction>(
            r#"
            INSERT INTO introductions (id, content, last_updated)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET content = EXCLUDED.content, last_updated = EXCLUDED.last_updated
            RETURNING *
            "#,
        )
        .bind(SINGLETON_ID)
        .bind(content)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(introduction)
    }
}
