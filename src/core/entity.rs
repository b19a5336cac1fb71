//! Entity trait defining the core abstraction for all stored records

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Base trait for every record kept by the service.
///
/// A record is split in two parts:
/// - the store-managed metadata: a surrogate `id` and the `created_at` /
///   `updated_at` timestamps
/// - the caller-supplied [`Entity::Fields`], which is what create and
///   full-record replace take as input
///
/// Storage backends only ever see validated `Fields`; validation lives in the
/// resource stores built on top of them.
pub trait Entity: Clone + Send + Sync + Serialize + 'static {
    /// The caller-supplied part of the record
    type Fields: Clone + Send + Sync + 'static;

    /// The singular resource name (e.g., "medicine"), used in errors and logs
    fn resource_name() -> &'static str;

    /// Assemble a record from store-managed metadata and its fields
    fn from_parts(
        id: i64,
        fields: Self::Fields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self;

    /// Get the surrogate key of this record
    fn id(&self) -> i64;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Field and value that no two records of this type may share
    ///
    /// Backends enforce it on create and update and report a clash as
    /// `EntityError::AlreadyExists`.
    fn unique_key(_fields: &Self::Fields) -> Option<(&'static str, String)> {
        None
    }
}
