//! Product resource.

use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, check_non_negative};

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product title, matched by the `q` search filter.
    pub title: String,
    /// Long-form product description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars. Must be non-negative.
    pub price: f64,
    /// Category slug. Referential integrity against the `category`
    /// collection is not checked.
    pub category: String,
    /// Ordered image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product is currently in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Check field range constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `price` is negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "price", self.price);
        ValidationError::from_errors(errors)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{"title":"Tee","price":20,"category":"shirts"}"#
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let prod: Product = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(prod.title, "Tee");
        assert!((prod.price - 20.0).abs() < f64::EPSILON);
        assert_eq!(prod.category, "shirts");
        assert!(prod.images.is_empty());
        assert!(prod.in_stock);
        assert!(prod.tags.is_empty());
    }

    #[test]
    fn test_valid_price_passes() {
        let prod: Product = serde_json::from_str(minimal_json()).unwrap();
        assert!(prod.validate().is_ok());
    }

    #[test]
    fn test_zero_price_passes() {
        let prod: Product =
            serde_json::from_str(r#"{"title":"Sample","price":0,"category":"misc"}"#).unwrap();
        assert!(prod.validate().is_ok());
    }

    #[test]
    fn test_negative_price_fails() {
        let prod: Product =
            serde_json::from_str(r#"{"title":"Tee","price":-1.5,"category":"shirts"}"#).unwrap();
        let err = prod.validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "price");
    }

    #[test]
    fn test_missing_price_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"title":"Tee","category":"shirts"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_in_stock_false_kept() {
        let prod: Product = serde_json::from_str(
            r#"{"title":"Tee","price":20,"category":"shirts","in_stock":false}"#,
        )
        .unwrap();
        assert!(!prod.in_stock);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let prod = Product {
            title: "Tee".to_owned(),
            description: None,
            price: 20.0,
            category: "shirts".to_owned(),
            images: vec!["https://cdn.example.com/tee.jpg".to_owned()],
            in_stock: true,
            tags: vec!["cotton".to_owned()],
        };
        let json = serde_json::to_value(&prod).unwrap();
        assert_eq!(json["title"], "Tee");
        assert_eq!(json["images"][0], "https://cdn.example.com/tee.jpg");
        assert_eq!(json["in_stock"], true);
        assert_eq!(json["tags"][0], "cotton");
    }
}
