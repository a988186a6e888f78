use serde::{Deserialize, Serialize};
use validator::Validate;

/// An extracurricular activity entry. The `date` field is free-form text
/// because the frontend sends both single dates and ranges
/// (e.g. "2023/05/15" or "2023/03-2023/06").
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
}

/// Payload for creating or fully overwriting an activity.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub image_url: Option<String>,
}
