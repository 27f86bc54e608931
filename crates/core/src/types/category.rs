//! Product category resource.

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// A product category.
///
/// Categories are referenced from products by `slug`. Slug uniqueness is
/// assumed by the storefront but not enforced here or by the store (no
/// unique index is created).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category display name.
    pub name: String,
    /// URL-friendly identifier (e.g. `shirts`).
    pub slug: String,
    /// Short description of the category.
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Check field range constraints.
    ///
    /// Categories carry no numeric fields, so this only exists to give all
    /// resources a uniform validate-before-insert path. Presence and type
    /// checks happen at deserialization.
    ///
    /// # Errors
    ///
    /// Never fails for the current field set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::from_errors(Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let cat: Category = serde_json::from_str(r#"{"name":"Shirts","slug":"shirts"}"#).unwrap();
        assert_eq!(cat.name, "Shirts");
        assert_eq!(cat.slug, "shirts");
        assert_eq!(cat.description, None);
        assert!(cat.validate().is_ok());
    }

    #[test]
    fn test_missing_slug_rejected() {
        let result = serde_json::from_str::<Category>(r#"{"name":"Shirts"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let cat = Category {
            name: "Shirts".to_owned(),
            slug: "shirts".to_owned(),
            description: Some("Tops and tees".to_owned()),
        };
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json["name"], "Shirts");
        assert_eq!(json["slug"], "shirts");
        assert_eq!(json["description"], "Tops and tees");
    }
}
