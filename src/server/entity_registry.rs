//! Route table of the pharmacy resources
//!
//! Resources are registered in a fixed order and keep it: routes are merged
//! and endpoints are listed in registration order. Two resources may not
//! share a name or a collection path.

use crate::core::error::RegistryError;
use axum::Router;
use std::fmt;

/// Operations a resource exposes over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operations {
    /// List, create, get, replace and delete
    Crud,
    /// List, create and get
    CreateRead,
}

impl Operations {
    fn collection_methods(self) -> &'static str {
        "GET|POST"
    }

    fn item_methods(self) -> &'static str {
        match self {
            Operations::Crud => "GET|PUT|DELETE",
            Operations::CreateRead => "GET",
        }
    }
}

/// A resource's routes, mounted under `path()` and `path()/{id}`
pub trait EntityDescriptor: Send + Sync {
    /// Resource name, as used in error bodies (e.g. "purchase_request")
    fn resource(&self) -> &'static str;

    /// Collection path (e.g. "/purchase-request")
    fn path(&self) -> &'static str;

    fn operations(&self) -> Operations;

    fn build_routes(&self) -> Router;
}

/// One line of the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub methods: &'static str,
    pub path: String,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15} {}", self.methods, self.path)
    }
}

#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource; fails if its name or path is already taken
    pub fn register<D>(&mut self, descriptor: D) -> Result<(), RegistryError>
    where
        D: EntityDescriptor + 'static,
    {
        for existing in &self.descriptors {
            if existing.resource() == descriptor.resource() {
                return Err(RegistryError::DuplicateResource {
                    resource: descriptor.resource(),
                });
            }
            if existing.path() == descriptor.path() {
                return Err(RegistryError::DuplicatePath {
                    path: descriptor.path(),
                    owner: existing.resource(),
                });
            }
        }

        tracing::debug!(
            resource = descriptor.resource(),
            path = descriptor.path(),
            "registering routes"
        );
        self.descriptors.push(Box::new(descriptor));
        Ok(())
    }

    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    pub fn resources(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.resource()).collect()
    }

    /// Collection and item endpoints of every resource
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.descriptors
            .iter()
            .flat_map(|d| {
                let operations = d.operations();
                [
                    Endpoint {
                        methods: operations.collection_methods(),
                        path: d.path().to_string(),
                    },
                    Endpoint {
                        methods: operations.item_methods(),
                        path: format!("{}/{{id}}", d.path()),
                    },
                ]
            })
            .collect()
    }
}
