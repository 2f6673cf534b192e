use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DevelopmentResponse, ExerciseResponse, GestationRequest};
use crate::services::guide::GuideService;

// Guidance Handlers

pub async fn baby_development(
    State(state): State<Arc<AppConfig>>,
    body: Bytes,
) -> Result<Json<DevelopmentResponse>, AppError> {
    let params = GestationRequest::from_body(&body)?.validate()?;
    debug!("Baby development requested for week {} day {:?}", params.weeks, params.days);

    let guide_service = GuideService::new(&state);
    Ok(Json(guide_service.generate(&params).await))
}

pub async fn exercise_recommendations(
    State(state): State<Arc<AppConfig>>,
    body: Bytes,
) -> Result<Json<ExerciseResponse>, AppError> {
    let params = GestationRequest::from_body(&body)?.validate()?;
    debug!("Exercise recommendations requested for week {} day {:?}", params.weeks, params.days);

    let guide_service = GuideService::new(&state);
    Ok(Json(guide_service.generate(&params).await))
}

// Method Handlers

/// Cross-origin preflight: success with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
