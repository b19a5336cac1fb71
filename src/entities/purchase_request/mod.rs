//! PurchaseRequest entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::PurchaseRequestDescriptor;
pub use model::{PurchaseRequest, PurchaseRequestFields, PurchaseRequestPayload};
pub use store::PurchaseRequestStore;
