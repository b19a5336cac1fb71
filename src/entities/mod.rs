//! Resource entities served by the pharmacy API
//!
//! Each entity module follows the same layout:
//! - `model`: the record, its storable fields and its request payload
//! - `store`: validation and reference checks in front of a `DataService`
//! - `handlers`: axum handlers over the store
//! - `descriptor`: the routes the entity contributes to the server

pub mod demand;
pub mod medicine;
pub mod purchase_request;
pub mod user;

pub use demand::{Demand, DemandStore};
pub use medicine::{Medicine, MedicineStore};
pub use purchase_request::{PurchaseRequest, PurchaseRequestStore};
pub use user::{User, UserStore};

use crate::core::error::FieldValidationError;

/// Field error for a reference to a record that does not exist
pub(crate) fn unresolved_reference(field: &str, id: i64) -> FieldValidationError {
    FieldValidationError {
        field: field.to_string(),
        message: format!("Invalid pk \"{}\" - object does not exist.", id),
    }
}
