//! Medicine HTTP handlers

use super::{model::Medicine, model::MedicinePayload, store::MedicineStore};
use crate::core::PharmacyResult;
use crate::core::validation::{EntityId, Payload};
use axum::{extract::State, http::StatusCode, response::Json};

/// Medicine-specific AppState
#[derive(Clone)]
pub struct MedicineAppState {
    pub store: MedicineStore,
}

pub async fn list_medicines(
    State(state): State<MedicineAppState>,
) -> PharmacyResult<Json<Vec<Medicine>>> {
    state.store.list().await.map(Json)
}

pub async fn get_medicine(
    State(state): State<MedicineAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<Json<Medicine>> {
    state.store.get(id).await.map(Json)
}

pub async fn create_medicine(
    State(state): State<MedicineAppState>,
    Payload(payload): Payload<MedicinePayload>,
) -> PharmacyResult<(StatusCode, Json<Medicine>)> {
    let medicine = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

pub async fn update_medicine(
    State(state): State<MedicineAppState>,
    EntityId(id): EntityId,
    Payload(payload): Payload<MedicinePayload>,
) -> PharmacyResult<Json<Medicine>> {
    state.store.update(id, payload).await.map(Json)
}

pub async fn delete_medicine(
    State(state): State<MedicineAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
