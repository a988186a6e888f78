use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single education history entry. Dates are free-form text; the frontend
/// renders them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: i64,
    pub school: String,
    pub degree: Option<String>,
    pub level: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EducationData {
    #[validate(length(min = 1, message = "School cannot be empty"))]
    pub school: String,
    pub degree: Option<String>,
    pub level: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub gpa: Option<String>,
}
