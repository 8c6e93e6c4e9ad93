use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::json;

use exam_buddy_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    handlers,
    middleware::RequestIdMiddleware,
    services::gateway::{AssistantMessage, ChatGateway, ChatMessage},
};

/// Gateway double returning one canned result and recording every call.
struct CannedGateway {
    result: AppResult<AssistantMessage>,
    calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl CannedGateway {
    fn new(result: AppResult<AssistantMessage>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn text(content: &str) -> Arc<Self> {
        Self::new(Ok(AssistantMessage {
            content: Some(content.to_string()),
            images: vec![],
        }))
    }
}

#[async_trait]
impl ChatGateway for CannedGateway {
    async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> AppResult<AssistantMessage> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), messages));
        self.result.clone()
    }
}

fn test_config() -> Config {
    Config {
        gateway_url: "http://localhost:9999/v1/chat/completions".to_string(),
        gateway_api_key: Some(SecretString::from("integration_test_key".to_string())),
        impact_model: "test/impact-model".to_string(),
        planner_model: "test/planner-model".to_string(),
        notes_model: "test/notes-model".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
    }
}

/// Same middleware stack as `main`.
macro_rules! test_app {
    ($gateway:expr) => {{
        let state = AppState::with_gateway(test_config(), $gateway);
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(RequestIdMiddleware)
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .send_wildcard()
                        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                        .allowed_headers(vec![
                            "authorization",
                            "x-client-info",
                            "apikey",
                            "content-type",
                        ])
                        .max_age(3600),
                )
                .service(handlers::exam_impact)
                .service(handlers::study_planner)
                .service(handlers::generate_short_notes)
                .service(handlers::health_check),
        )
        .await
    }};
}

const IMPACT_REPLY: &str = r#"{
    "notices": [{
        "id": "n-1",
        "title": "Application window extended",
        "summary": "The registration deadline moved by one week.",
        "source": "NTA",
        "sourceUrl": "https://example.com/notice",
        "date": "2025-02-01",
        "priority": "important",
        "impactScore": 6,
        "impactAnalysis": "More time to complete the application.",
        "actionItems": ["Register before the new deadline"],
        "affectedSubjects": [],
        "category": "eligibility"
    }],
    "lastUpdated": "2025-02-02T10:00:00Z",
    "profileSummary": "JEE Main 2026 aspirant"
}"#;

#[actix_web::test]
async fn test_exam_impact_end_to_end() {
    let gateway = CannedGateway::text(&format!("Here you go! ```json\n{}\n```", IMPACT_REPLY));
    let app = test_app!(gateway.clone());

    let request = test::TestRequest::post()
        .uri("/exam-impact")
        .insert_header(("Origin", "http://localhost:5173"))
        .set_json(json!({ "profile": { "examName": "JEE Main", "attemptYear": "2026" } }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["notices"][0]["category"], "eligibility");
    assert_eq!(body["profileSummary"], "JEE Main 2026 aspirant");

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "test/impact-model");
    assert_eq!(calls[0].1.len(), 2);
}

#[actix_web::test]
async fn test_missing_exam_name_returns_exact_error_body() {
    let app = test_app!(CannedGateway::text("unused"));

    let request = test::TestRequest::post()
        .uri("/exam-impact")
        .insert_header(("Origin", "http://localhost:5173"))
        .set_json(json!({ "profile": { "subjects": ["Physics"] } }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // CORS headers stay intact on failures
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );

    let body = test::read_body(response).await;
    assert_eq!(&body[..], br#"{"error":"Profile with exam name is required"}"#);
}

#[actix_web::test]
async fn test_study_planner_missing_fields_are_enumerated() {
    let app = test_app!(CannedGateway::text("unused"));

    let request = test::TestRequest::post()
        .uri("/study-planner")
        .set_json(json!({ "examName": "NEET", "subjects": [{ "name": "Biology" }], "daysLeft": 30 }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Missing required fields: dailyHours");
}

#[actix_web::test]
async fn test_upstream_rate_limit_surfaces_as_429() {
    use exam_buddy_server::errors::AppError;

    let gateway = CannedGateway::new(Err(AppError::RateLimited));
    let app = test_app!(gateway);

    let request = test::TestRequest::post()
        .uri("/study-planner")
        .set_json(json!({
            "examName": "NEET",
            "subjects": [{ "name": "Biology", "topics": [] }],
            "daysLeft": 10,
            "dailyHours": 4,
            "startDate": "2025-03-01"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Rate limit exceeded. Please try again later.");
}

#[actix_web::test]
async fn test_malformed_reply_returns_raw_content() {
    let broken = "```json\n{\"weeks\": [\n```";
    let gateway = CannedGateway::text(broken);
    let app = test_app!(gateway);

    let request = test::TestRequest::post()
        .uri("/study-planner")
        .set_json(json!({
            "examName": "NEET",
            "subjects": [{ "name": "Biology", "topics": [] }],
            "daysLeft": 10,
            "dailyHours": 4,
            "startDate": "2025-03-01"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["raw"], broken);
}

#[actix_web::test]
async fn test_preflight_gets_permissive_cors_and_empty_body() {
    let app = test_app!(CannedGateway::text("unused"));

    let request = test::TestRequest::with_uri("/exam-impact")
        .method(actix_web::http::Method::OPTIONS)
        .insert_header(("Origin", "http://localhost:5173"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type,authorization"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    let allowed = response
        .headers()
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));

    let body = test::read_body(response).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_health_check_reports_version() {
    let app = test_app!(CannedGateway::text("unused"));

    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
