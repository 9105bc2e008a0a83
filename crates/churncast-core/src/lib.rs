//! Core types for Churncast
//!
//! Shared between the inference and web crates: the customer record, the
//! form schema with its UI-enforced ranges, and the workspace error type.

pub mod error;
pub mod record;
pub mod schema;

pub use error::{Error, Result};
pub use record::CustomerRecord;
pub use schema::{FieldKind, FieldSpec, FormSchema, FIELDS};
