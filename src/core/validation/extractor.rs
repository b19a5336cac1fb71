//! Axum extractors that turn malformed requests into typed errors
//!
//! axum's own `Json` and `Path` rejections answer with plain-text bodies and
//! a mix of 400/415/422 statuses. These wrappers report every malformed body
//! or path id as a 400 with the service's JSON error body.

use crate::core::error::{PharmacyError, RequestError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON body extractor
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_medicine(
///     State(state): State<MedicineAppState>,
///     Payload(payload): Payload<MedicinePayload>,
/// ) -> PharmacyResult<(StatusCode, Json<Medicine>)> {
///     // payload is well-formed JSON of the right shape, not yet validated
/// }
/// ```
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PharmacyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            PharmacyError::Validation(ValidationError::InvalidJson {
                message: e.body_text(),
            })
        })?;

        Ok(Payload(payload))
    }
}

/// Integer record id taken from the `{id}` path segment
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = PharmacyError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RequestError::InvalidEntityId { id: e.body_text() })?;

        raw.parse::<i64>()
            .map(EntityId)
            .map_err(|_| RequestError::InvalidEntityId { id: raw }.into())
    }
}
