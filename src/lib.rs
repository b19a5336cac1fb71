//! # Pharmacy-RS
//!
//! A pharmacy inventory service exposing medicines, users, purchase requests
//! and demands over a JSON REST API.
//!
//! ## Features
//!
//! - **Validated stores**: every write is validated and its references
//!   resolved before anything is persisted
//! - **Typed errors**: one error enum mapping onto HTTP status codes and a
//!   stable `{code, message, details}` body
//! - **Pluggable storage**: in-memory tables by default, PostgreSQL behind
//!   the `postgres` feature
//! - **Automatic timestamps**: `created_at` and `updated_at` managed by the
//!   storage layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pharmacy::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_stores(Stores::in_memory())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataService, Entity, EntityError, PharmacyError, PharmacyResult, ValidationError,
    };

    // === Entities ===
    pub use crate::entities::demand::{Demand, DemandPayload, DemandStore};
    pub use crate::entities::medicine::{Medicine, MedicinePayload, MedicineStore};
    pub use crate::entities::purchase_request::{
        PurchaseRequest, PurchaseRequestPayload, PurchaseRequestStore,
    };
    pub use crate::entities::user::{User, UserPayload, UserStore};

    // === Storage ===
    pub use crate::storage::InMemoryDataService;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresDataService;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, Operations, ServerBuilder, Stores};
}
