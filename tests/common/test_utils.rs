use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use travel_buddy::{
    config::{
        Config, GeocodingConfig, HttpConfig, LlmConfig, PlacesConfig, ServerConfig,
        WeatherConfig,
    },
    geo::{GeocodingClient, PlacesClient, WeatherClient},
    llm::LlmClient,
    server::{AppState, router},
};
use wiremock::MockServer;

/// Configuration whose upstream base URLs all point at `upstream`
pub fn create_test_config(upstream: &str) -> Config {
    Config {
        server: ServerConfig::default(),
        llm: LlmConfig {
            base_url: upstream.to_string(),
            api_key: "test-openai-key".to_string(),
            model: "gpt-4o-mini".to_string(),
        },
        weather: WeatherConfig {
            base_url: format!("{}/data/2.5", upstream),
            api_key: "test-weather-key".to_string(),
        },
        places: PlacesConfig {
            base_url: format!("{}/0.1/en/places", upstream),
            api_key: "test-otm-key".to_string(),
            ..PlacesConfig::default()
        },
        geocoding: GeocodingConfig {
            base_url: upstream.to_string(),
            user_agent: "travel-buddy".to_string(),
        },
        http: HttpConfig { timeout_secs: 5 },
    }
}

/// Router wired to a stubbed upstream and the given model client
pub fn create_test_app(upstream: &MockServer, llm: Arc<dyn LlmClient>) -> Router {
    let config = create_test_config(&upstream.uri());
    let http = reqwest::Client::new();

    let state = AppState::new(
        llm,
        GeocodingClient::new(config.geocoding, http.clone()),
        WeatherClient::new(config.weather, http.clone()),
        PlacesClient::new(config.places, http),
    );

    router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request and returns the status with the raw body text
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Response is not JSON ({}): {}", e, body));
    (status, json)
}

pub async fn received_count(upstream: &MockServer) -> usize {
    upstream
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
