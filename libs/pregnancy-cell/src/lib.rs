// Pregnancy Cell - fetal development and exercise guidance
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::UpstreamError;
pub use models::{
    DevelopmentResponse,
    Exercise,
    ExerciseResponse,
    GestationParams,
    GestationRequest,
    Language,
};

pub use router::pregnancy_routes;

pub mod api {
    pub use crate::services::claude::ClaudeClient;
    pub use crate::services::guide::{GuideContent, GuideService};
}
