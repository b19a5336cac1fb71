//! Entity descriptor for Medicine

use super::handlers::{
    MedicineAppState, create_medicine, delete_medicine, get_medicine, list_medicines,
    update_medicine,
};
use super::store::MedicineStore;
use crate::server::{EntityDescriptor, Operations};
use axum::{Router, routing::get};

/// Descriptor for the Medicine entity
pub struct MedicineDescriptor {
    pub store: MedicineStore,
}

impl MedicineDescriptor {
    pub fn new(store: MedicineStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for MedicineDescriptor {
    fn resource(&self) -> &'static str {
        "medicine"
    }

    fn path(&self) -> &'static str {
        "/medicine"
    }

    fn operations(&self) -> Operations {
        Operations::Crud
    }

    fn build_routes(&self) -> Router {
        let state = MedicineAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/medicine", get(list_medicines).post(create_medicine))
            .route(
                "/medicine/{id}",
                get(get_medicine).put(update_medicine).delete(delete_medicine),
            )
            .with_state(state)
    }
}
