//! Demand entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::DemandDescriptor;
pub use model::{Demand, DemandFields, DemandPayload};
pub use store::DemandStore;
