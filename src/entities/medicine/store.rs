//! Medicine store: validation in front of the medicine table

use super::model::{Medicine, MedicinePayload};
use crate::core::{DataService, PharmacyResult};
use std::sync::Arc;

/// Validated access to Medicine records
#[derive(Clone)]
pub struct MedicineStore {
    data: Arc<dyn DataService<Medicine>>,
}

impl MedicineStore {
    pub fn new(data: Arc<dyn DataService<Medicine>>) -> Self {
        Self { data }
    }

    /// Create a medicine; fails with a validation error when `name` is
    /// missing or blank
    pub async fn create(&self, payload: MedicinePayload) -> PharmacyResult<Medicine> {
        let fields = payload.into_fields()?;
        let medicine = self.data.create(fields).await?;
        tracing::info!(id = medicine.id, name = %medicine.name, "medicine created");
        Ok(medicine)
    }

    pub async fn get(&self, id: i64) -> PharmacyResult<Medicine> {
        tracing::debug!(id, "fetching medicine");
        self.data.fetch(id).await
    }

    pub async fn list(&self) -> PharmacyResult<Vec<Medicine>> {
        self.data.list().await
    }

    /// Replace every field of a medicine
    ///
    /// The id is resolved before the payload is looked at, so an unknown id
    /// is reported as not found even when the body is invalid too.
    pub async fn update(&self, id: i64, payload: MedicinePayload) -> PharmacyResult<Medicine> {
        self.data.fetch(id).await?;

        let fields = payload.into_fields()?;
        let medicine = self.data.update(id, fields).await?;
        tracing::info!(id, "medicine updated");
        Ok(medicine)
    }

    pub async fn delete(&self, id: i64) -> PharmacyResult<()> {
        self.data.delete(id).await?;
        tracing::info!(id, "medicine deleted");
        Ok(())
    }

    pub async fn exists(&self, id: i64) -> PharmacyResult<bool> {
        self.data.exists(id).await
    }

    /// Ids among `ids` with no medicine behind them
    pub async fn missing(&self, ids: &[i64]) -> PharmacyResult<Vec<i64>> {
        self.data.missing(ids).await
    }
}
