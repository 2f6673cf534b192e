use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use shared_models::error::AppError;

pub const MIN_WEEKS: i64 = 1;
pub const MAX_WEEKS: i64 = 42;
pub const INVALID_WEEKS_MESSAGE: &str = "Invalid weeks parameter";

// ==============================================================================
// LANGUAGE
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Hi,
    Ar,
    Ur,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "ar" => Some(Language::Ar),
            "ur" => Some(Language::Ur),
            _ => None,
        }
    }

    /// Unknown or missing codes resolve to English, for prompts and fallback alike.
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or(Language::En)
    }

    /// Plain language name, used inside field descriptions of a prompt.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ar => "Arabic",
            Language::Ur => "Urdu",
        }
    }

    /// Name including the script where the model needs the hint.
    pub fn label(self) -> &'static str {
        match self {
            Language::Hi => "Hindi (Devanagari script)",
            other => other.name(),
        }
    }

    /// Short script-qualified name for the closing "all text" directive.
    pub fn script_name(self) -> &'static str {
        match self {
            Language::Hi => "Hindi (Devanagari)",
            other => other.name(),
        }
    }
}

// ==============================================================================
// REQUEST
// ==============================================================================

/// Body accepted by both endpoints. Every field is decoded leniently: a value
/// of the wrong type becomes `None` instead of failing the whole body, so only
/// `weeks` can cause a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestationRequest {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub weeks: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub days: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
}

/// Integers, and floats with no fractional part (`20.0`).
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integral(&value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

impl GestationRequest {
    /// Decodes a raw request body. A body that is not a JSON object is
    /// treated as a bad `weeks` parameter.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Undecodable request body: {}", e);
            AppError::BadRequest(INVALID_WEEKS_MESSAGE.to_string())
        })
    }

    pub fn validate(self) -> Result<GestationParams, AppError> {
        match self.weeks {
            Some(weeks) if (MIN_WEEKS..=MAX_WEEKS).contains(&weeks) => Ok(GestationParams {
                weeks,
                days: self.days,
                language: self.language,
            }),
            _ => Err(AppError::BadRequest(INVALID_WEEKS_MESSAGE.to_string())),
        }
    }
}

/// Validated gestation parameters. `days` and `language` are carried as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestationParams {
    pub weeks: i64,
    pub days: Option<i64>,
    pub language: Option<String>,
}

impl GestationParams {
    pub fn new(weeks: i64, days: i64, language: &str) -> Self {
        Self {
            weeks,
            days: Some(days),
            language: Some(language.to_string()),
        }
    }

    pub fn days_or_zero(&self) -> i64 {
        self.days.unwrap_or(0)
    }

    pub fn language(&self) -> Language {
        Language::resolve(self.language.as_deref())
    }
}

// ==============================================================================
// RESPONSES
// ==============================================================================

pub const DEVELOPMENT_FACT_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentResponse {
    pub icon: String,
    pub length: String,
    pub weight: String,
    pub comparison: String,
    pub title: String,
    pub description: String,
    pub developments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub benefits: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub intro: String,
    pub exercises: Vec<Exercise>,
}

// ==============================================================================
// MESSAGES API WIRE TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
