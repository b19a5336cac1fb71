//! Entity descriptor for Demand

use super::handlers::{
    DemandAppState, create_demand, delete_demand, get_demand, list_demands, update_demand,
};
use super::store::DemandStore;
use crate::server::{EntityDescriptor, Operations};
use axum::{Router, routing::get};

pub struct DemandDescriptor {
    pub store: DemandStore,
}

impl DemandDescriptor {
    pub fn new(store: DemandStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for DemandDescriptor {
    fn resource(&self) -> &'static str {
        "demand"
    }

    fn path(&self) -> &'static str {
        "/demand"
    }

    fn operations(&self) -> Operations {
        Operations::Crud
    }

    fn build_routes(&self) -> Router {
        let state = DemandAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/demand", get(list_demands).post(create_demand))
            .route(
                "/demand/{id}",
                get(get_demand).put(update_demand).delete(delete_demand),
            )
            .with_state(state)
    }
}
