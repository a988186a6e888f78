use async_trait::async_trait;

use crate::{
    entities::category::{Category, CategoryData},
    errors::AppError,
    repositories::sqlx_repo::SqlxCategoryRepo,
};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>, AppError>;

    /// Fails with a conflict when the name is already taken (unique
    /// constraint in storage).
    async fn insert(&self, data: &CategoryData) -> Result<Category, AppError>;

    async fn update(&self, id: i64, data: &CategoryData) -> Result<Option<Category>, AppError>;

    /// Removing a category cascades to its skills at the storage layer.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxCategoryRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCategoryRepo { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqlxCategoryRepo {
    async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn insert(&self, data: &CategoryData) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    async fn update(&self, id: i64, data: &CategoryData) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(&data.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
