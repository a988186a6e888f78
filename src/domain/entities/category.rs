use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::skill::Skill;

// ───── Database Model ───────────────────────────────────────────────

/// Bare category row. Name is unique across all categories; the
/// constraint lives in storage, a duplicate insert surfaces as a conflict.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// ───── API Response Model ───────────────────────────────────────────

/// Owning-collection view: a category together with every skill it owns.
/// The embedded skills carry their foreign key only, never the parent
/// object, so the output stays acyclic.
#[derive(Debug, Serialize)]
pub struct CategoryWithSkills {
    pub id: i64,
    pub name: String,
    pub skills: Vec<Skill>,
}

impl CategoryWithSkills {
    pub fn new(category: Category, skills: Vec<Skill>) -> Self {
        CategoryWithSkills {
            id: category.id,
            name: category.name,
            skills,
        }
    }
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryData {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_view_serializes_skills_without_back_reference() {
        let view = CategoryWithSkills::new(
            Category {
                id: 1,
                name: "Languages".into(),
            },
            vec![Skill {
                id: 7,
                name: "Go".into(),
                description: None,
                category_id: 1,
            }],
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Languages");
        assert_eq!(json["skills"][0]["categoryId"], 1);
        // the embedded skill must identify its parent by key only
        assert!(json["skills"][0].get("category").is_none());
    }

    #[test]
    fn fresh_category_has_empty_skill_list() {
        let view = CategoryWithSkills::new(
            Category {
                id: 2,
                name: "Tools".into(),
            },
            Vec::new(),
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["skills"], serde_json::json!([]));
    }
}
