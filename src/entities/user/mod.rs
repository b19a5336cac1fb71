//! User entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::UserDescriptor;
pub use model::{User, UserFields, UserPayload};
pub use store::UserStore;
