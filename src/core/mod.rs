//! Core module containing fundamental traits and types of the service

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{EntityError, PharmacyError, PharmacyResult, ValidationError};
pub use service::DataService;
