//! Diagnostics route handler.
//!
//! `GET /test` reports process and database connectivity status. Unlike the
//! resource routes, it catches every store error and surfaces it as status
//! text in the body, so the endpoint itself always returns 200.

use axum::{Json, extract::State};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::state::AppState;

/// Maximum error text length surfaced in the report.
const ERROR_TEXT_LIMIT: usize = 50;

/// Maximum number of collection names listed.
const COLLECTION_LIMIT: usize = 10;

/// Connectivity report returned from `GET /test`.
///
/// The field names and emoji status strings are part of the API contract;
/// the frontend's health widget matches on them.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: String,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Diagnostics report.
///
/// GET /test
pub async fn report(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "✅ Running",
        database: "✅ Available".to_owned(),
        // An empty DATABASE_URL loads but configures nothing useful;
        // report it the way the frontend health widget expects.
        database_url: if state.config().database_url.expose_secret().is_empty() {
            "❌ Not Set"
        } else {
            "✅ Set"
        },
        database_name: state.store().database_name().to_owned(),
        connection_status: "Connected",
        collections: Vec::new(),
    };

    match state.store().list_collection_names().await {
        Ok(mut names) => {
            names.truncate(COLLECTION_LIMIT);
            report.collections = names;
            report.database = "✅ Connected & Working".to_owned();
        }
        Err(err) => {
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&err.to_string(), ERROR_TEXT_LIMIT)
            );
        }
    }

    Json(report)
}

/// Truncate to at most `max` characters (not bytes, so multibyte error text
/// cannot split a code point).
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
