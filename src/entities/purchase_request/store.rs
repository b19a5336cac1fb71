//! PurchaseRequest store

use super::model::{PurchaseRequest, PurchaseRequestFields, PurchaseRequestPayload};
use crate::core::{DataService, PharmacyResult, ValidationError};
use crate::entities::unresolved_reference;
use crate::entities::{MedicineStore, UserStore};
use std::sync::Arc;

/// Validated access to PurchaseRequest records
///
/// Both references are resolved against the user and medicine stores on
/// every create and replace.
#[derive(Clone)]
pub struct PurchaseRequestStore {
    data: Arc<dyn DataService<PurchaseRequest>>,
    users: UserStore,
    medicines: MedicineStore,
}

impl PurchaseRequestStore {
    pub fn new(
        data: Arc<dyn DataService<PurchaseRequest>>,
        users: UserStore,
        medicines: MedicineStore,
    ) -> Self {
        Self {
            data,
            users,
            medicines,
        }
    }

    pub async fn create(&self, payload: PurchaseRequestPayload) -> PharmacyResult<PurchaseRequest> {
        let fields = self.resolve(payload).await?;
        let request = self.data.create(fields).await?;
        tracing::info!(
            id = request.id,
            user = request.user,
            medicine_id = request.medicine_id,
            "purchase request created"
        );
        Ok(request)
    }

    pub async fn get(&self, id: i64) -> PharmacyResult<PurchaseRequest> {
        self.data.fetch(id).await
    }

    pub async fn list(&self) -> PharmacyResult<Vec<PurchaseRequest>> {
        self.data.list().await
    }

    /// Replace both references of a purchase request; unknown ids are
    /// reported before the payload is validated
    pub async fn update(
        &self,
        id: i64,
        payload: PurchaseRequestPayload,
    ) -> PharmacyResult<PurchaseRequest> {
        self.data.fetch(id).await?;

        let fields = self.resolve(payload).await?;
        let request = self.data.update(id, fields).await?;
        tracing::info!(id, "purchase request updated");
        Ok(request)
    }

    pub async fn delete(&self, id: i64) -> PharmacyResult<()> {
        self.data.delete(id).await?;
        tracing::info!(id, "purchase request deleted");
        Ok(())
    }

    async fn resolve(&self, payload: PurchaseRequestPayload) -> PharmacyResult<PurchaseRequestFields> {
        let fields = payload.into_fields()?;

        let mut errors = Vec::new();
        if !self.users.exists(fields.user).await? {
            errors.push(unresolved_reference("user", fields.user));
        }
        if !self.medicines.exists(fields.medicine_id).await? {
            errors.push(unresolved_reference("medicine_id", fields.medicine_id));
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError::FieldErrors(errors).into())
        }
    }
}
