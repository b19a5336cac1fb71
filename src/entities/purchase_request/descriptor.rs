//! Entity descriptor for PurchaseRequest

use super::handlers::{
    PurchaseRequestAppState, create_purchase_request, delete_purchase_request,
    get_purchase_request, list_purchase_requests, update_purchase_request,
};
use super::store::PurchaseRequestStore;
use crate::server::{EntityDescriptor, Operations};
use axum::{Router, routing::get};

pub struct PurchaseRequestDescriptor {
    pub store: PurchaseRequestStore,
}

impl PurchaseRequestDescriptor {
    pub fn new(store: PurchaseRequestStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for PurchaseRequestDescriptor {
    fn resource(&self) -> &'static str {
        "purchase_request"
    }

    fn path(&self) -> &'static str {
        "/purchase-request"
    }

    fn operations(&self) -> Operations {
        Operations::Crud
    }

    fn build_routes(&self) -> Router {
        let state = PurchaseRequestAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route(
                "/purchase-request",
                get(list_purchase_requests).post(create_purchase_request),
            )
            .route(
                "/purchase-request/{id}",
                get(get_purchase_request)
                    .put(update_purchase_request)
                    .delete(delete_purchase_request),
            )
            .with_state(state)
    }
}
