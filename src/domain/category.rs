use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EntityStatus, normalize_slug};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub status: EntityStatus,
}

impl NewCategory {
    #[must_use]
    pub fn new(
        name: String,
        slug: String,
        description: Option<String>,
        status: EntityStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub status: EntityStatus,
}

impl UpdateCategory {
    #[must_use]
    pub fn new(
        name: String,
        slug: String,
        description: Option<String>,
        status: EntityStatus,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            slug: normalize_slug(&slug),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_normalizes_slug_and_trims() {
        let category = NewCategory::new(
            "  Junction Boxes ".to_string(),
            "Junction  Boxes".to_string(),
            Some("  ".to_string()),
            EntityStatus::Active,
        );
        assert_eq!(category.name, "Junction Boxes");
        assert_eq!(category.slug, "junction-boxes");
        assert_eq!(category.description, None);
    }
}
