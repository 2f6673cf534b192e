use std::sync::Arc;

use shared_config::AppConfig;

pub struct TestConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "http://localhost:54321".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointing the model client at a mock server, e.g. `MockServer::uri()`.
    pub fn with_mock_llm(base_url: &str) -> Self {
        Self {
            api_key: Some("test-anthropic-key".to_string()),
            base_url: base_url.to_string(),
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            anthropic_api_key: self.api_key.clone(),
            anthropic_base_url: self.base_url.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockLlmResponses;

impl MockLlmResponses {
    /// Messages API envelope wrapping `text` in a single text block.
    pub fn text_envelope(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "model": shared_config::DEFAULT_ANTHROPIC_MODEL,
            "content": [
                { "type": "text", "text": text }
            ],
            "stop_reason": "end_turn"
        })
    }

    pub fn error_envelope(message: &str) -> serde_json::Value {
        serde_json::json!({
            "type": "error",
            "error": {
                "type": "api_error",
                "message": message
            }
        })
    }

    pub fn development_json() -> serde_json::Value {
        serde_json::json!({
            "icon": "🍌",
            "length": "25.6 cm",
            "weight": "300 g",
            "comparison": "🍌 About the size of a banana",
            "title": "Week 20: Halfway there",
            "description": "Your baby is swallowing and practising movements.",
            "developments": [
                "Vernix coats the skin",
                "Hearing is developing",
                "Sleep cycles are forming",
                "Kicks become noticeable"
            ]
        })
    }

    pub fn exercises_json() -> serde_json::Value {
        serde_json::json!({
            "intro": "Gentle movement helps during the second trimester.",
            "exercises": [
                {
                    "name": "Walking",
                    "emoji": "🚶‍♀️",
                    "description": "Walk 30 minutes at an easy pace.",
                    "benefits": "Supports circulation."
                },
                {
                    "name": "Cat-Cow Stretch",
                    "emoji": "🧘‍♀️",
                    "description": "Alternate arching and rounding the back on all fours.",
                    "benefits": "Eases back tension."
                }
            ]
        })
    }
}
