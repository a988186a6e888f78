use serde::{Deserialize, Serialize};
use validator::Validate;

/// A portfolio project. `technologies` is an ordered list of tags, stored
/// as a Postgres text array rather than a separately addressable entity.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub year: Option<String>,
    pub project_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub year: Option<String>,
    pub project_url: Option<String>,
}
