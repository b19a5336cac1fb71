//! Demand store

use super::model::{Demand, DemandFields, DemandPayload};
use crate::core::{DataService, PharmacyResult, ValidationError};
use crate::entities::unresolved_reference;
use crate::entities::{MedicineStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct DemandStore {
    data: Arc<dyn DataService<Demand>>,
    users: UserStore,
    medicines: MedicineStore,
}

impl DemandStore {
    pub fn new(
        data: Arc<dyn DataService<Demand>>,
        users: UserStore,
        medicines: MedicineStore,
    ) -> Self {
        Self {
            data,
            users,
            medicines,
        }
    }

    /// Record a demand; an empty medicine list is valid
    pub async fn create(&self, payload: DemandPayload) -> PharmacyResult<Demand> {
        let fields = self.resolve(payload).await?;
        let demand = self.data.create(fields).await?;
        tracing::info!(
            id = demand.id,
            user = demand.user,
            medicines = demand.medicines.len(),
            "demand created"
        );
        Ok(demand)
    }

    pub async fn get(&self, id: i64) -> PharmacyResult<Demand> {
        self.data.fetch(id).await
    }

    pub async fn list(&self) -> PharmacyResult<Vec<Demand>> {
        self.data.list().await
    }

    pub async fn update(&self, id: i64, payload: DemandPayload) -> PharmacyResult<Demand> {
        self.data.fetch(id).await?;

        let fields = self.resolve(payload).await?;
        let demand = self.data.update(id, fields).await?;
        tracing::info!(id, "demand updated");
        Ok(demand)
    }

    pub async fn delete(&self, id: i64) -> PharmacyResult<()> {
        self.data.delete(id).await?;
        tracing::info!(id, "demand deleted");
        Ok(())
    }

    async fn resolve(&self, payload: DemandPayload) -> PharmacyResult<DemandFields> {
        let fields = payload.into_fields()?;

        let mut errors = Vec::new();
        if !self.users.exists(fields.user).await? {
            errors.push(unresolved_reference("user", fields.user));
        }
        for medicine in self.medicines.missing(&fields.medicines).await? {
            errors.push(unresolved_reference("medicines", medicine));
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::FieldErrors(errors).into())
        }
    }
}
