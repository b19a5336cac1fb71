//! Medicine entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::MedicineDescriptor;
pub use model::{Medicine, MedicineFields, MedicinePayload};
pub use store::MedicineStore;
