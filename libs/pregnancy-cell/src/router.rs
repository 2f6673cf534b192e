use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;
use shared_utils::cors::with_cors_headers;

use crate::handlers;

pub fn pregnancy_routes(state: Arc<AppConfig>) -> Router {
    let routes = Router::new()
        .route(
            "/baby-development",
            post(handlers::baby_development)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/exercise-recommendations",
            post(handlers::exercise_recommendations)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        );

    with_cors_headers(routes).with_state(state)
}
