//! Demand HTTP handlers

use super::model::{Demand, DemandPayload};
use super::store::DemandStore;
use crate::core::PharmacyResult;
use crate::core::validation::{EntityId, Payload};
use axum::{extract::State, http::StatusCode, response::Json};

#[derive(Clone)]
pub struct DemandAppState {
    pub store: DemandStore,
}

pub async fn list_demands(
    State(state): State<DemandAppState>,
) -> PharmacyResult<Json<Vec<Demand>>> {
    state.store.list().await.map(Json)
}

pub async fn get_demand(
    State(state): State<DemandAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<Json<Demand>> {
    state.store.get(id).await.map(Json)
}

pub async fn create_demand(
    State(state): State<DemandAppState>,
    Payload(payload): Payload<DemandPayload>,
) -> PharmacyResult<(StatusCode, Json<Demand>)> {
    let demand = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(demand)))
}

pub async fn update_demand(
    State(state): State<DemandAppState>,
    EntityId(id): EntityId,
    Payload(payload): Payload<DemandPayload>,
) -> PharmacyResult<Json<Demand>> {
    state.store.update(id, payload).await.map(Json)
}

pub async fn delete_demand(
    State(state): State<DemandAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<StatusCode> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
