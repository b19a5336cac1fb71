//! PurchaseRequest HTTP handlers

use super::model::{PurchaseRequest, PurchaseRequestPayload};
use super::store::PurchaseRequestStore;
use crate::core::PharmacyResult;
use crate::core::validation::{EntityId, Payload};
use axum::{extract::State, http::StatusCode, response::Json};

#[derive(Clone)]
pub struct PurchaseRequestAppState {
    pub store: PurchaseRequestStore,
}

pub async fn list_purchase_requests(
    State(state): State<PurchaseRequestAppState>,
) -> PharmacyResult<Json<Vec<PurchaseRequest>>> {
    state.store.list().await.map(Json)
}

pub async fn get_purchase_request(
    State(state): State<PurchaseRequestAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<Json<PurchaseRequest>> {
    state.store.get(id).await.map(Json)
}

pub async fn create_purchase_request(
    State(state): State<PurchaseRequestAppState>,
    Payload(payload): Payload<PurchaseRequestPayload>,
) -> PharmacyResult<(StatusCode, Json<PurchaseRequest>)> {
    let request = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn update_purchase_request(
    State(state): State<PurchaseRequestAppState>,
    EntityId(id): EntityId,
    Payload(payload): Payload<PurchaseRequestPayload>,
) -> PharmacyResult<Json<PurchaseRequest>> {
    state.store.update(id, payload).await.map(Json)
}

pub async fn delete_purchase_request(
    State(state): State<PurchaseRequestAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
