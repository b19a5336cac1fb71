//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for every resource through its `EntityDescriptor`
//! - a `/health` route
//! - tracing and CORS layers

pub mod builder;
pub mod entity_registry;
pub mod host;
pub mod rest;

pub use builder::ServerBuilder;
pub use entity_registry::{Endpoint, EntityDescriptor, EntityRegistry, Operations};
pub use host::Stores;
