use serde::{Deserialize, Serialize};
use validator::Validate;

/// Foreign-key view of a skill: `category_id` identifies the owning
/// category, the parent object itself is never embedded.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
}

/// Payload for creating or fully overwriting a skill. `category_id` must
/// resolve to a live category before anything is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillData {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_serializes_with_camel_case_foreign_key() {
        let skill = Skill {
            id: 1,
            name: "Go".into(),
            description: Some("".into()),
            category_id: 1,
        };

        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["categoryId"], 1);
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn skill_data_requires_parseable_category_id() {
        let err = serde_json::from_str::<SkillData>(
            r#"{"name":"Go","description":"","categoryId":"not-a-number"}"#,
        );
        assert!(err.is_err());
    }
}
