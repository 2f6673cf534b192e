use thiserror::Error;

/// Failure of the model call. Never surfaced to clients: `GuideService`
/// logs it and serves fallback content instead.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Upstream API error: {0}")]
    Api(String),

    #[error("Upstream response contained no text content")]
    EmptyContent,

    #[error("Malformed JSON: {0}")]
    MalformedContent(#[from] serde_json::Error),

    #[error("Response does not match expected shape: {0}")]
    InvalidShape(String),
}
