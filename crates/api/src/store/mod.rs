//! Document store adapter for `MongoDB`.
//!
//! # Collections
//!
//! One collection per resource type, named after the lowercase type name:
//!
//! - `category` - Product categories
//! - `product` - Storefront products
//! - `order` - Customer orders (write-once)
//!
//! Documents are schema-flexible; the shape is enforced by the core crate's
//! DTOs before anything reaches this layer. Inserted documents receive a
//! store-generated `ObjectId`, surfaced to clients as a 24-hex `id` string.
//!
//! # Failure model
//!
//! `connect` only parses the connection string; connectivity problems
//! surface at operation time as [`StoreError::Database`]. Only the
//! diagnostics endpoint recovers from those - every other route propagates
//! them as a generic server error.

mod filter;
mod transform;

pub use filter::product_filter;
pub use transform::document_to_json;

use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level error (includes connectivity failures).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A validated document failed BSON serialization.
    #[error("document serialization error: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),

    /// The store generated an identifier that is not an `ObjectId`.
    #[error("store returned a non-ObjectId identifier")]
    UnexpectedId,
}

/// Handle to the named collections of one `MongoDB` database.
///
/// Constructed once at startup and injected into handlers via `AppState`.
#[derive(Clone)]
pub struct Store {
    database: Database,
}

impl Store {
    /// Connect to the database named by the configuration.
    ///
    /// Uses the connection string's default database when it names one,
    /// falling back to `config.database_name`. The driver connects lazily,
    /// so an unreachable server does not fail here.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the connection string is invalid.
    pub async fn connect(config: &ApiConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.database_url.expose_secret()).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&config.database_name));
        Ok(Self { database })
    }

    /// Name of the backing database.
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Insert one validated document into `collection` and return the
    /// generated identifier as a 24-hex string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] if the value cannot be represented
    /// as BSON, [`StoreError::Database`] if the insert fails, or
    /// [`StoreError::UnexpectedId`] if the generated id is not an `ObjectId`.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        value: &T,
    ) -> Result<String, StoreError> {
        let document = mongodb::bson::to_document(value)?;
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            _ => Err(StoreError::UnexpectedId),
        }
    }

    /// Return every document in `collection` matching `filter`.
    ///
    /// No pagination, sorting, or limit: the entire matching set is
    /// collected. Pass an empty document to list a whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// List the collection names of the backing database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the server is unreachable.
    pub async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names().await?)
    }

    /// Round-trip a ping command to verify connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the server is unreachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
