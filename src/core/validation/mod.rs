//! Validation and filtering system
//!
//! Payload structs derive `validator::Validate`; the filters here normalize
//! values before validation and the extractors reject malformed requests
//! before they reach a handler.

pub mod extractor;
pub mod filters;

pub use extractor::{EntityId, Payload};
