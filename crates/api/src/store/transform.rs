//! Response shape transform: internal `_id` to string `id`.

use mongodb::bson::{Bson, Document};

/// Convert a stored document into its JSON response shape.
///
/// The internal `_id` field is removed and replaced by a string `id` field
/// (ObjectId hex for store-generated ids, display form otherwise). The
/// remaining fields are rendered as plain JSON via relaxed extended JSON,
/// so doubles and arrays come out as ordinary JSON values.
#[must_use]
pub fn document_to_json(mut doc: Document) -> serde_json::Value {
    match doc.remove("_id") {
        Some(Bson::ObjectId(oid)) => {
            doc.insert("id", oid.to_hex());
        }
        Some(Bson::String(s)) => {
            doc.insert("id", s);
        }
        Some(other) => {
            doc.insert("id", other.to_string());
        }
        None => {}
    }
    Bson::Document(doc).into_relaxed_extjson()
}
