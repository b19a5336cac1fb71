//! Entity descriptor for User

use super::handlers::{UserAppState, create_user, get_user, list_users};
use super::store::UserStore;
use crate::server::{EntityDescriptor, Operations};
use axum::{Router, routing::get};

pub struct UserDescriptor {
    pub store: UserStore,
}

impl UserDescriptor {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for UserDescriptor {
    fn resource(&self) -> &'static str {
        "user"
    }

    fn path(&self) -> &'static str {
        "/user"
    }

    fn operations(&self) -> Operations {
        Operations::CreateRead
    }

    fn build_routes(&self) -> Router {
        let state = UserAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/user", get(list_users).post(create_user))
            .route("/user/{id}", get(get_user))
            .with_state(state)
    }
}
