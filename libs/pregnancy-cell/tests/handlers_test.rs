use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pregnancy_cell::handlers::*;
use pregnancy_cell::models::{DevelopmentResponse, GestationParams};
use pregnancy_cell::services::fallback;
use shared_utils::test_utils::{MockLlmResponses, TestConfig};

fn body(value: serde_json::Value) -> Bytes {
    Bytes::from(value.to_string())
}

#[tokio::test]
async fn test_baby_development_fallback() {
    let result = baby_development(
        State(TestConfig::default().to_arc()),
        body(json!({ "weeks": 20, "days": 3, "language": "en" })),
    )
    .await;

    let response = result.unwrap().0;
    assert_eq!(response.title, "Week 20: Baby Development");
    assert_eq!(response.developments.len(), 4);
}

#[tokio::test]
async fn test_baby_development_missing_days_and_language() {
    let result = baby_development(State(TestConfig::default().to_arc()), body(json!({ "weeks": 5 }))).await;

    let response = result.unwrap().0;
    assert_eq!(
        response.description,
        "At 5 weeks and 0 days, your baby is growing and developing rapidly. Each week brings new milestones!"
    );
}

#[tokio::test]
async fn test_exercise_recommendations_fallback_urdu() {
    let result = exercise_recommendations(
        State(TestConfig::default().to_arc()),
        body(json!({ "weeks": 30, "days": 2, "language": "ur" })),
    )
    .await;

    let response = result.unwrap().0;
    assert!(response.intro.starts_with("30 ہفتے میں"));
    assert_eq!(response.exercises[1].name, "زچگی سے پہلے یوگا");
}

#[tokio::test]
async fn test_invalid_weeks_is_bad_request() {
    let result = exercise_recommendations(
        State(TestConfig::default().to_arc()),
        body(json!({ "weeks": 50, "days": 0, "language": "en" })),
    )
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.message(), "Invalid weeks parameter");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preflight_and_method_not_allowed() {
    assert_eq!(preflight().await, StatusCode::OK);
    assert_eq!(
        method_not_allowed().await.into_response().status(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_exercise_recommendations_from_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockLlmResponses::text_envelope(
            &MockLlmResponses::exercises_json().to_string(),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = exercise_recommendations(
        State(TestConfig::with_mock_llm(&mock_server.uri()).to_arc()),
        body(json!({ "weeks": 18, "days": 4, "language": "en" })),
    )
    .await;

    let response = result.unwrap().0;
    assert_eq!(response.intro, "Gentle movement helps during the second trimester.");
    assert_eq!(response.exercises.len(), 2);
    assert_eq!(response.exercises[1].name, "Cat-Cow Stretch");
}

#[tokio::test]
async fn test_wrong_shape_from_model_falls_back() {
    let mock_server = MockServer::start().await;

    let three_facts = json!({
        "icon": "🫐",
        "length": "1 cm",
        "weight": "1 g",
        "comparison": "🫐 Blueberry",
        "title": "Week 8",
        "description": "Tiny.",
        "developments": ["a", "b", "c"]
    });

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockLlmResponses::text_envelope(&three_facts.to_string())),
        )
        .mount(&mock_server)
        .await;

    let result = baby_development(
        State(TestConfig::with_mock_llm(&mock_server.uri()).to_arc()),
        body(json!({ "weeks": 8, "days": 1, "language": "en" })),
    )
    .await;

    let expected: DevelopmentResponse = fallback::development_fallback(&GestationParams::new(8, 1, "en"));
    assert_eq!(result.unwrap().0, expected);
}
