//! Order route handlers.
//!
//! Orders are write-once: there is no listing, update, or status transition
//! route. Beyond field validation, order creation performs the single
//! business check of this system - the client-supplied totals must be
//! arithmetically consistent. The subtotal is trusted, not recomputed from
//! the line items.

use axum::{Json, extract::State};

use vic_signature_core::Order;

use super::Created;
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Collection holding order documents.
const COLLECTION: &str = "order";

/// Allowed rounding slack between `subtotal + shipping` and `total`.
const TOTALS_TOLERANCE: f64 = 0.01;

/// Whether the client-supplied totals are arithmetically consistent.
fn totals_consistent(subtotal: f64, shipping: f64, total: f64) -> bool {
    (subtotal + shipping - total).abs() <= TOTALS_TOLERANCE
}

/// Validate and create an order.
///
/// POST /api/orders
///
/// # Errors
///
/// Returns 422 with field detail on constraint violations, 400 with
/// "Totals don't add up" when the totals check fails; store failures
/// propagate as a generic server error.
pub async fn create(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<Json<Created>> {
    order.validate()?;

    if !totals_consistent(order.subtotal, order.shipping, order.total) {
        return Err(ApiError::TotalsMismatch);
    }

    let id = state.store().create_document(COLLECTION, &order).await?;
    tracing::info!(items = order.items.len(), total = order.total, %id, "order created");
    Ok(Json(Created { id }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_totals_pass() {
        assert!(totals_consistent(100.0, 5.0, 105.0));
        assert!(totals_consistent(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_slack_within_tolerance_passes() {
        assert!(totals_consistent(100.0, 5.0, 105.005));
        assert!(totals_consistent(100.0, 5.0, 104.995));
    }

    #[test]
    fn test_mismatch_fails() {
        assert!(!totals_consistent(100.0, 5.0, 200.0));
        assert!(!totals_consistent(100.0, 5.0, 105.02));
        assert!(!totals_consistent(100.0, 5.0, 104.98));
    }

    #[test]
    fn test_free_shipping_default() {
        // shipping defaults to 0 at deserialization; the check must hold
        // for subtotal == total orders.
        assert!(totals_consistent(49.99, 0.0, 49.99));
    }
}
