use serde::{Deserialize, Serialize};
use validator::Validate;

/// A work experience entry. `skills` holds denormalized skill names, not
/// references into the skills table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub logo_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceData {
    #[validate(length(min = 1, message = "Company cannot be empty"))]
    pub company: String,
    #[validate(length(min = 1, message = "Position cannot be empty"))]
    pub position: String,
    pub logo_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
