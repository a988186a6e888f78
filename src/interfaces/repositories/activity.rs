use async_trait::async_trait;

use crate::{
    entities::activity::{Activity, ActivityData},
    errors::AppError,
    repositories::sqlx_repo::SqlxActivityRepo,
};

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Unordered full scan.
    async fn find_all(&self) -> Result<Vec<Activity>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, AppError>;

    /// Inserts a new row; the identity is assigned by the database.
    async fn insert(&self, data: &ActivityData) -> Result<Activity, AppError>;

    /// Overwrites every mutable field of the row matching `id`.
    async fn update(&self, id: i64, data: &ActivityData) -> Result<Option<Activity>, AppError>;

    /// Returns whether a row was actually removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxActivityRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxActivityRepo { pool }
    }
}

#[async_trait]
impl ActivityRepository for SqlxActivityRepo {
    async fn find_all(&self) -> Result<Vec<Activity>, AppError> {
        let activities = sqlx::query_as::<_, Activity>("SELECT * FROM activities")
            .fetch_all(&self.pool)
            .await?;

        Ok(activities)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, AppError> {
        let activity = sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(activity)
    }

    async fn insert(&self, data: &ActivityData) -> Result<Activity, AppError> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (title, description, date, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.date)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn update(&self, id: i64, data: &ActivityData) -> Result<Option<Activity>, AppError> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            UPDATE activities
            SET title = $1, description = $2, date = $3, image_url = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.date)
        .bind(&data.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(activity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
