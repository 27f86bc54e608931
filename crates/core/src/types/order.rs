//! Order resource with embedded line items and customer details.
//!
//! Line items snapshot the product title, unit price, and image at order
//! time, so later product edits do not alter historical orders.

use serde::{Deserialize, Serialize};

use crate::validate::{FieldError, ValidationError, check_non_negative};

/// A single line item in an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Referenced product id as a string.
    pub product_id: String,
    /// Snapshot of the product title at order time.
    pub title: String,
    /// Quantity ordered. Must be at least 1.
    pub quantity: i64,
    /// Unit price snapshot at order time. Must be non-negative.
    pub price: f64,
    /// Primary image URL snapshot.
    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    /// Collect range violations for this line item, prefixing field paths
    /// with `items[index]`.
    fn collect_errors(&self, index: usize, errors: &mut Vec<FieldError>) {
        if self.quantity < 1 {
            errors.push(FieldError::new(
                format!("items[{index}].quantity"),
                format!("must be at least 1 (got {})", self.quantity),
            ));
        }
        check_non_negative(errors, &format!("items[{index}].price"), self.price);
    }
}

/// Customer contact details embedded in an order.
///
/// No format validation is applied; the original system accepted free-form
/// strings and this preserves that contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Order lifecycle status.
///
/// The set is closed: unknown values are rejected at deserialization. The
/// backend stores the status but never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Fulfilled,
    Cancelled,
}

/// A customer order.
///
/// `subtotal`, `shipping`, and `total` are client-supplied; the route layer
/// checks their arithmetic consistency but the subtotal is not recomputed
/// from the line items. Item-list emptiness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Line items with snapshot fields.
    pub items: Vec<CartItem>,
    /// Embedded customer details.
    pub customer: Customer,
    /// Sum of line totals as reported by the client. Must be non-negative.
    pub subtotal: f64,
    /// Shipping cost. Must be non-negative.
    #[serde(default)]
    pub shipping: f64,
    /// Grand total. Must be non-negative.
    pub total: f64,
    /// Lifecycle status; stored, never transitioned.
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Check field range constraints on the order and every line item.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every violating field: item
    /// quantities below 1, negative item prices, or negative totals.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            item.collect_errors(index, &mut errors);
        }
        check_non_negative(&mut errors, "subtotal", self.subtotal);
        check_non_negative(&mut errors, "shipping", self.shipping);
        check_non_negative(&mut errors, "total", self.total);
        ValidationError::from_errors(errors)
    }
}
