//! End-to-end tests for the gateway HTTP surface
//!
//! Each test wires the actix application to a mock inference engine and
//! exercises the generate and health endpoints over HTTP.

use actix_web::{App, test, web};
use llama_gateway::config::Config;
use llama_gateway::core::cache::{CacheEntry, CacheKey};
use llama_gateway::core::metrics::MetricsSnapshot;
use llama_gateway::server::{AppState, routes};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(backend_url: &str) -> Config {
    let mut config = Config::default();
    config.gateway.backend.base_url = backend_url.to_string();
    config.gateway.backend.timeout_secs = 5;
    config.gateway.cache.max_entries = 16;
    config
}

fn seeded_metrics() -> MetricsSnapshot {
    MetricsSnapshot {
        inference_latency_ms: 0.0,
        input_token_count: 2,
        output_token_count: 2,
        cpu_usage_percent: 0.0,
        memory_usage_percent: 0.0,
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_cache_size() {
    let backend = MockServer::start().await;
    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let app = init_app!(state);

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"status": "healthy", "cache_size": 0}));
}

#[actix_web::test]
async fn generate_returns_seeded_entry_without_backend_call() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "never"})))
        .expect(0)
        .mount(&backend)
        .await;

    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let key = CacheKey::from_request("Test prompt", 100, 0.7);
    state.cache.put(
        key,
        CacheEntry {
            response: "Cached response".to_string(),
            metrics: seeded_metrics(),
        },
    );

    let app = init_app!(state);
    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Test prompt", "max_tokens": 100, "temperature": 0.7}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["response"], "Cached response");
    // Hits return the originally recorded metrics untouched
    assert_eq!(body["metrics"]["input_token_count"], 2);
    assert_eq!(body["metrics"]["inference_latency_ms"], 0.0);
}

#[actix_web::test]
async fn generate_stores_and_returns_backend_response() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "This is a test response", "done": true})),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let app = init_app!(state);

    // Defaults apply for max_tokens and temperature
    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Test prompt"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["response"], "This is a test response");

    let metrics = &body["metrics"];
    for field in [
        "inference_latency_ms",
        "input_token_count",
        "output_token_count",
        "cpu_usage_percent",
        "memory_usage_percent",
    ] {
        assert!(metrics.get(field).is_some(), "missing metrics field {}", field);
    }
    assert_eq!(metrics["input_token_count"], 2);
    assert_eq!(metrics["output_token_count"], 5);
    assert_eq!(state.cache.len(), 1);

    // The identical request is now served from the cache; the mock's
    // expect(1) verifies the backend saw exactly one call
    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Test prompt"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let cached: Value = test::read_body_json(response).await;
    assert_eq!(cached, body);
}

#[actix_web::test]
async fn backend_error_status_maps_to_bad_gateway() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model exploded"))
        .mount(&backend)
        .await;

    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Error test"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 502);

    let body: Value = test::read_body_json(response).await;
    let detail = body["detail"].as_str().expect("detail field");
    assert!(detail.contains("500"));

    // Failed requests never touch the cache
    assert_eq!(state.cache.len(), 0);
}

#[actix_web::test]
async fn unreachable_backend_maps_to_service_unavailable() {
    // Grab a port that nothing listens on once the mock server is gone
    let backend = MockServer::start().await;
    let dead_uri = backend.uri();
    drop(backend);

    let state = AppState::new(test_config(&dead_uri)).unwrap();
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Error test"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status().as_u16(), 503);

    let body: Value = test::read_body_json(response).await;
    assert!(body["detail"].is_string());
    assert_eq!(state.cache.len(), 0);
}

#[actix_web::test]
async fn missing_response_field_is_served_as_empty_generation() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&backend)
        .await;

    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let app = init_app!(state);

    let request = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"prompt": "Test prompt"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert!(response.status().is_success());

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["response"], "");
    assert_eq!(body["metrics"]["output_token_count"], 0);
}

#[actix_web::test]
async fn requests_differing_in_one_field_are_cached_separately() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(2)
        .mount(&backend)
        .await;

    let state = AppState::new(test_config(&backend.uri())).unwrap();
    let app = init_app!(state);

    for temperature in [0.2, 0.9] {
        let request = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({"prompt": "Test prompt", "temperature": temperature}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert!(response.status().is_success());
    }

    assert_eq!(state.cache.len(), 2);
}
