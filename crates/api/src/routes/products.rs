//! Product route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use vic_signature_core::Product;

use super::Created;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{document_to_json, product_filter};

/// Collection holding product documents.
const COLLECTION: &str = "product";

/// Listing query parameters. Both filters are optional and combinable.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact category slug match.
    pub category: Option<String>,
    /// Case-insensitive substring match on the product title.
    pub q: Option<String>,
}

/// List products, optionally filtered.
///
/// GET /api/products?category=&q=
///
/// # Errors
///
/// Propagates store failures as a generic server error.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<serde_json::Value>>> {
    let filter = product_filter(query.category.as_deref(), query.q.as_deref());
    let docs = state.store().get_documents(COLLECTION, filter).await?;
    Ok(Json(docs.into_iter().map(document_to_json).collect()))
}

/// Validate and create a product.
///
/// POST /api/products
///
/// # Errors
///
/// Returns 422 with field detail on constraint violations; store failures
/// propagate as a generic server error.
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Created>> {
    product.validate()?;
    let id = state.store().create_document(COLLECTION, &product).await?;
    tracing::info!(title = %product.title, %id, "product created");
    Ok(Json(Created { id }))
}
