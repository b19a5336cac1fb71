//! User HTTP handlers

use super::{model::User, model::UserPayload, store::UserStore};
use crate::core::PharmacyResult;
use crate::core::validation::{EntityId, Payload};
use axum::{extract::State, http::StatusCode, response::Json};

#[derive(Clone)]
pub struct UserAppState {
    pub store: UserStore,
}

pub async fn list_users(State(state): State<UserAppState>) -> PharmacyResult<Json<Vec<User>>> {
    state.store.list().await.map(Json)
}

pub async fn get_user(
    State(state): State<UserAppState>,
    EntityId(id): EntityId,
) -> PharmacyResult<Json<User>> {
    state.store.get(id).await.map(Json)
}

pub async fn create_user(
    State(state): State<UserAppState>,
    Payload(payload): Payload<UserPayload>,
) -> PharmacyResult<(StatusCode, Json<User>)> {
    let user = state.store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
