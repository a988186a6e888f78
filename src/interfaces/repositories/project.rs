use async_trait::async_trait;

use crate::{
    entities::project::{Project, ProjectData},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Project>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;
    async fn insert(&self, data: &ProjectData) -> Result<Project, AppError>;
    async fn update(&self, id: i64, data: &ProjectData) -> Result<Option<Project>, AppError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn find_all(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects")
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn insert(&self, data: &ProjectData) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, technologies, image_url, year, project_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.technologies)
        .bind(&data.image_url)
        .bind(&data.year)
        .bind(&data.project_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update(&self, id: i64, data: &ProjectData) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = $1, description = $2, technologies = $3,
                image_url = $4, year = $5, project_url = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.technologies)
        .bind(&data.image_url)
        .bind(&data.year)
        .bind(&data.project_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
