//! Category route handlers.

use axum::{Json, extract::State};
use mongodb::bson::Document;

use vic_signature_core::Category;

use super::Created;
use crate::error::Result;
use crate::state::AppState;
use crate::store::document_to_json;

/// Collection holding category documents.
const COLLECTION: &str = "category";

/// List all categories.
///
/// GET /api/categories
///
/// # Errors
///
/// Propagates store failures as a generic server error.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<serde_json::Value>>> {
    let docs = state
        .store()
        .get_documents(COLLECTION, Document::new())
        .await?;
    Ok(Json(docs.into_iter().map(document_to_json).collect()))
}

/// Validate and create a category.
///
/// POST /api/categories
///
/// # Errors
///
/// Returns 422 with field detail on constraint violations; store failures
/// propagate as a generic server error.
pub async fn create(
    State(state): State<AppState>,
    Json(category): Json<Category>,
) -> Result<Json<Created>> {
    category.validate()?;
    let id = state.store().create_document(COLLECTION, &category).await?;
    tracing::info!(slug = %category.slug, %id, "category created");
    Ok(Json(Created { id }))
}
