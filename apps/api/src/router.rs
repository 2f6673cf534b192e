use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use pregnancy_cell::router::pregnancy_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Prenatal Guide API is running!" }))
        .nest("/api", pregnancy_routes(state))
}
