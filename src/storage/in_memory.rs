//! In-memory implementation of DataService for testing and development

use crate::core::error::{PharmacyError, PharmacyResult, StorageError};
use crate::core::{DataService, Entity};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
    /// Unique key value -> owning id
    unique: HashMap<String, i64>,
}

impl<T: Entity> Table<T> {
    /// Fail when `key` is held by a record other than `id`
    fn check_unique(
        &self,
        key: &Option<(&'static str, String)>,
        id: Option<i64>,
    ) -> PharmacyResult<()> {
        if let Some((field, value)) = key {
            if self.unique.get(value).is_some_and(|&owner| Some(owner) != id) {
                return Err(PharmacyError::already_exists(
                    T::resource_name(),
                    *field,
                    value.clone(),
                ));
            }
        }
        Ok(())
    }

    fn claim(&mut self, key: Option<(&'static str, String)>, id: i64) {
        self.release(id);
        if let Some((_, value)) = key {
            self.unique.insert(value, id);
        }
    }

    fn release(&mut self, id: i64) {
        self.unique.retain(|_, owner| *owner != id);
    }
}

/// In-memory data service implementation
///
/// Rows live in an ordered map so `list` comes back sorted by id. The id
/// sequence and the map share one lock, so allocating an id and inserting
/// the row happen atomically, and so do the unique key check and the write it
/// guards. Cloning shares the underlying table.
pub struct InMemoryDataService<T> {
    table: Arc<RwLock<Table<T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create a new, empty in-memory table
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
                unique: HashMap::new(),
            })),
        }
    }

    fn read(&self) -> PharmacyResult<RwLockReadGuard<'_, Table<T>>> {
        self.table.read().map_err(|_| {
            PharmacyError::Storage(StorageError::LockPoisoned {
                table: T::resource_name(),
            })
        })
    }

    fn write(&self) -> PharmacyResult<RwLockWriteGuard<'_, Table<T>>> {
        self.table.write().map_err(|_| {
            PharmacyError::Storage(StorageError::LockPoisoned {
                table: T::resource_name(),
            })
        })
    }
}

impl<T> Clone for InMemoryDataService<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, fields: T::Fields) -> PharmacyResult<T> {
        let key = T::unique_key(&fields);
        let mut table = self.write()?;
        table.check_unique(&key, None)?;

        let id = table.next_id;
        table.next_id += 1;

        let now = Utc::now();
        let record = T::from_parts(id, fields, now, now);
        table.rows.insert(id, record.clone());
        table.claim(key, id);

        Ok(record)
    }

    async fn get(&self, id: i64) -> PharmacyResult<Option<T>> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn list(&self) -> PharmacyResult<Vec<T>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, fields: T::Fields) -> PharmacyResult<T> {
        let mut table = self.write()?;

        let created_at = table
            .rows
            .get(&id)
            .map(|existing| existing.created_at())
            .ok_or_else(|| PharmacyError::not_found(T::resource_name(), id))?;

        let key = T::unique_key(&fields);
        table.check_unique(&key, Some(id))?;

        let record = T::from_parts(id, fields, created_at, Utc::now());
        table.rows.insert(id, record.clone());
        table.claim(key, id);

        Ok(record)
    }

    async fn delete(&self, id: i64) -> PharmacyResult<()> {
        let mut table = self.write()?;
        table
            .rows
            .remove(&id)
            .ok_or_else(|| PharmacyError::not_found(T::resource_name(), id))?;
        table.release(id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> PharmacyResult<bool> {
        Ok(self.read()?.rows.contains_key(&id))
    }

    async fn missing(&self, ids: &[i64]) -> PharmacyResult<Vec<i64>> {
        let table = self.read()?;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !table.rows.contains_key(id))
            .collect())
    }
}
