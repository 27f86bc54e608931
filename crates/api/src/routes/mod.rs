//! HTTP route handlers for the Vic Signature API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Brand banner (liveness)
//! GET  /test                - Diagnostics report (never errors)
//!
//! # Resources
//! GET  /api/categories      - List all categories
//! POST /api/categories      - Create a category
//! GET  /api/products        - List products (?category=slug&q=substring)
//! POST /api/products        - Create a product
//! POST /api/orders          - Create an order (totals check)
//! ```
//!
//! All resources are create-only; there are no update or delete routes.
//! Every created document is acknowledged with `{"id": "<24-hex>"}`.

pub mod categories;
pub mod diagnostics;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Acknowledgement for a created document.
#[derive(Debug, Serialize)]
pub struct Created {
    /// Store-generated identifier as a 24-hex string.
    pub id: String,
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(categories::list).post(categories::create))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/", get(products::list).post(products::create))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Brand banner
        .route("/", get(home::banner))
        // Diagnostics
        .route("/test", get(diagnostics::report))
        // Resource routes
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
}
