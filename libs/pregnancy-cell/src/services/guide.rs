use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::error::UpstreamError;
use crate::models::{
    DevelopmentResponse, ExerciseResponse, GestationParams, DEVELOPMENT_FACT_COUNT,
};
use crate::services::{claude::ClaudeClient, fallback, prompt};

/// A kind of pregnancy guidance that can be generated by the model or served
/// from the static tables.
pub trait GuideContent: DeserializeOwned + Serialize + Sized {
    const KIND: &'static str;
    const MAX_TOKENS: u32;

    fn prompt(params: &GestationParams) -> String;

    fn fallback(params: &GestationParams) -> Self;

    /// Structural checks beyond what deserialization enforces.
    fn check_shape(&self) -> Result<(), UpstreamError> {
        Ok(())
    }
}

impl GuideContent for DevelopmentResponse {
    const KIND: &'static str = "baby development";
    const MAX_TOKENS: u32 = 1000;

    fn prompt(params: &GestationParams) -> String {
        prompt::development_prompt(params)
    }

    fn fallback(params: &GestationParams) -> Self {
        fallback::development_fallback(params)
    }

    fn check_shape(&self) -> Result<(), UpstreamError> {
        if self.developments.len() != DEVELOPMENT_FACT_COUNT {
            return Err(UpstreamError::InvalidShape(format!(
                "expected {} developments, got {}",
                DEVELOPMENT_FACT_COUNT,
                self.developments.len()
            )));
        }
        Ok(())
    }
}

impl GuideContent for ExerciseResponse {
    const KIND: &'static str = "exercise recommendations";
    const MAX_TOKENS: u32 = 1500;

    fn prompt(params: &GestationParams) -> String {
        prompt::exercise_prompt(params)
    }

    fn fallback(params: &GestationParams) -> Self {
        fallback::exercise_fallback(params)
    }

    fn check_shape(&self) -> Result<(), UpstreamError> {
        if self.exercises.is_empty() {
            return Err(UpstreamError::InvalidShape("exercise list is empty".to_string()));
        }
        Ok(())
    }
}

pub struct GuideService {
    client: Option<ClaudeClient>,
}

impl GuideService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: ClaudeClient::new(config),
        }
    }

    /// Model-generated content when possible, fallback content otherwise.
    /// This is the only place an `UpstreamError` is absorbed.
    pub async fn generate<T: GuideContent>(&self, params: &GestationParams) -> T {
        let Some(client) = &self.client else {
            debug!("No API key configured, serving fallback {}", T::KIND);
            return T::fallback(params);
        };

        match Self::try_generate::<T>(client, params).await {
            Ok(content) => {
                info!("Generated {} for week {}", T::KIND, params.weeks);
                content
            }
            Err(e) => {
                error!("Failed to generate {}: {}; serving fallback", T::KIND, e);
                T::fallback(params)
            }
        }
    }

    /// Calls the model and parses its reply, without any fallback.
    pub async fn try_generate<T: GuideContent>(
        client: &ClaudeClient,
        params: &GestationParams,
    ) -> Result<T, UpstreamError> {
        let prompt = T::prompt(params);
        let text = client.complete(&prompt, T::MAX_TOKENS).await?;

        let content: T = serde_json::from_str(&text)?;
        content.check_shape()?;

        Ok(content)
    }
}
