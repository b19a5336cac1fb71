//! Medicine entity model with validation and filtering

use crate::core::Entity;
use crate::core::{PharmacyError, PharmacyResult};
use crate::core::validation::filters::{required, round_decimals, trim};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated, caller-supplied fields of a [`Medicine`]
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub count: i64,
}

impl Entity for Medicine {
    type Fields = MedicineFields;

    fn resource_name() -> &'static str {
        "medicine"
    }

    fn from_parts(
        id: i64,
        fields: MedicineFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            count: fields.count,
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

/// Request body for creating or replacing a medicine
///
/// Every field is optional at the serde level so that a missing field is
/// reported by validation (400) rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MedicinePayload {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 255, message = "This field may not be blank.")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(
        required(message = "This field is required."),
        range(min = 0.0, message = "Ensure this value is greater than or equal to 0.")
    )]
    pub price: Option<f64>,

    #[validate(
        required(message = "This field is required."),
        range(min = 0, message = "Ensure this value is greater than or equal to 0.")
    )]
    pub count: Option<i64>,
}

impl MedicinePayload {
    /// Normalize, validate and convert into storable fields
    pub fn into_fields(self) -> PharmacyResult<MedicineFields> {
        let payload = Self {
            name: trim(self.name),
            description: self.description,
            price: round_decimals(self.price, 2),
            count: self.count,
        };
        payload.validate()?;
        if payload.price.is_some_and(|price| !price.is_finite()) {
            return Err(PharmacyError::invalid_field(
                "price",
                "A valid number is required.",
            ));
        }

        Ok(MedicineFields {
            name: required(payload.name, "name")?,
            description: payload.description.unwrap_or_default(),
            price: required(payload.price, "price")?,
            count: required(payload.count, "count")?,
        })
    }
}
