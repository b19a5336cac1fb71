//! Service trait for record persistence

use crate::core::Entity;
use crate::core::error::{PharmacyError, PharmacyResult};
use async_trait::async_trait;

/// Service trait for persisting one table of records
///
/// Implementations provide CRUD operations for a specific record type and
/// assign ids and timestamps. They do not validate fields: callers hand them
/// already-validated [`Entity::Fields`].
///
/// `update` and `delete` must fail with `EntityError::NotFound` when the id is
/// absent. `create` and `update` must fail with `EntityError::AlreadyExists`
/// when [`Entity::unique_key`] clashes with another record. Ids are never
/// reused.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Insert a new record and return it with its generated id
    async fn create(&self, fields: T::Fields) -> PharmacyResult<T>;

    /// Get a record by id
    async fn get(&self, id: i64) -> PharmacyResult<Option<T>>;

    /// List all records, ordered by id
    async fn list(&self) -> PharmacyResult<Vec<T>>;

    /// Replace every field of an existing record
    async fn update(&self, id: i64, fields: T::Fields) -> PharmacyResult<T>;

    /// Delete a record
    async fn delete(&self, id: i64) -> PharmacyResult<()>;

    /// Check whether a record exists
    async fn exists(&self, id: i64) -> PharmacyResult<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Return the ids that have no record, in the order given
    async fn missing(&self, ids: &[i64]) -> PharmacyResult<Vec<i64>> {
        let mut missing = Vec::new();
        for &id in ids {
            if !self.exists(id).await? {
                missing.push(id);
            }
        }
        Ok(missing)
    }

    /// Get a record by id, failing with `NotFound` when it is absent
    async fn fetch(&self, id: i64) -> PharmacyResult<T> {
        self.get(id)
            .await?
            .ok_or_else(|| PharmacyError::not_found(T::resource_name(), id))
    }
}
