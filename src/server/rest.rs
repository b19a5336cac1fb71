//! REST router assembly
//!
//! Merges the health route, every registered entity route and any custom
//! routes, then applies the HTTP layers.

use super::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub struct RestExposure;

impl RestExposure {
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
    }

    fn health_routes() -> Router {
        Router::new().route("/health", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({ "status": "ok" }))
    }
}
