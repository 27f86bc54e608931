//! Vic Signature Core - Shared domain types.
//!
//! This crate provides the resource types accepted and stored by the
//! Vic Signature backend, together with their field-level validation.
//!
//! # Architecture
//!
//! The core crate contains only types and validators - no I/O, no database
//! access, no HTTP. Presence and primitive-type checks are handled by serde
//! at deserialization; range constraints (non-negative prices, minimum
//! quantities) live in each type's `validate` method.
//!
//! # Modules
//!
//! - [`types`] - Category, Product, and Order resources
//! - [`validate`] - Field-level validation error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{FieldError, ValidationError};
