//! PurchaseRequest entity model

use crate::core::Entity;
use crate::core::PharmacyResult;
use crate::core::validation::filters::required;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's request to purchase one medicine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub id: i64,
    pub user: i64,
    pub medicine_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequestFields {
    pub user: i64,
    pub medicine_id: i64,
}

impl Entity for PurchaseRequest {
    type Fields = PurchaseRequestFields;

    fn resource_name() -> &'static str {
        "purchase_request"
    }

    fn from_parts(
        id: i64,
        fields: PurchaseRequestFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user: fields.user,
            medicine_id: fields.medicine_id,
            created_at,
            updated_at,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Request body for creating or replacing a purchase request
///
/// An explicit `null` deserializes to `None` and fails `required` exactly
/// like an absent field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PurchaseRequestPayload {
    #[validate(required(message = "This field is required."))]
    pub user: Option<i64>,

    #[validate(required(message = "This field is required."))]
    pub medicine_id: Option<i64>,
}

impl PurchaseRequestPayload {
    /// Check presence of both references; resolution happens in the store
    pub fn into_fields(self) -> PharmacyResult<PurchaseRequestFields> {
        self.validate()?;

        Ok(PurchaseRequestFields {
            user: required(self.user, "user")?,
            medicine_id: required(self.medicine_id, "medicine_id")?,
        })
    }
}
