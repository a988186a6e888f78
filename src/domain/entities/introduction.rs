use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The identity of the one permitted introduction row.
pub const SINGLETON_ID: i64 = 1;

/// Singleton resource: at most one row exists, lazily created on first
/// read with empty content and the current date.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Introduction {
    pub id: i64,
    pub content: String,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntroductionData {
    pub content: String,
}
