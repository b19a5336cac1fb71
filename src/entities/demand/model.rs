//! Demand entity model

use crate::core::Entity;
use crate::core::PharmacyResult;
use crate::core::validation::filters::{dedup_ids, required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user's aggregated demand for zero or more medicines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub id: i64,
    pub user: i64,
    pub medicines: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemandFields {
    pub user: i64,
    pub medicines: Vec<i64>,
}

impl Entity for Demand {
    type Fields = DemandFields;

    fn resource_name() -> &'static str {
        "demand"
    }

    fn from_parts(
        id: i64,
        fields: DemandFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user: fields.user,
            medicines: fields.medicines,
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

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DemandPayload {
    #[validate(required(message = "This field is required."))]
    pub user: Option<i64>,

    /// `null` and absent both mean no medicines
    pub medicines: Option<Vec<i64>>,
}

impl DemandPayload {
    pub fn into_fields(self) -> PharmacyResult<DemandFields> {
        self.validate()?;

        Ok(DemandFields {
            user: required(self.user, "user")?,
            medicines: dedup_ids(self.medicines.unwrap_or_default()),
        })
    }
}
