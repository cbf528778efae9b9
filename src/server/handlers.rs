use super::types::{
    ChatRequest, ChatResponse, CityQuery, GeocodeResponse, Hotel, PlaceQuery, WeatherResponse,
};
use crate::{
    ApiError, Error, Result,
    config::Config,
    geo::{Feature, GeocodingClient, PlacesClient, WeatherClient, links},
    llm::{LlmClient, OpenAiClient},
    planner::TripPlanner,
};
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    response::Json,
};
use std::{sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// Read-only handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
    pub geocoder: Arc<GeocodingClient>,
    pub weather: Arc<WeatherClient>,
    pub places: Arc<PlacesClient>,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        geocoder: GeocodingClient,
        weather: WeatherClient,
        places: PlacesClient,
    ) -> Self {
        let geocoder = Arc::new(geocoder);
        Self {
            planner: Arc::new(TripPlanner::new(llm, geocoder.clone())),
            geocoder,
            weather: Arc::new(weather),
            places: Arc::new(places),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone(), http.clone()));

        Ok(Self::new(
            llm,
            GeocodingClient::new(config.geocoding.clone(), http.clone()),
            WeatherClient::new(config.weather.clone(), http.clone()),
            PlacesClient::new(config.places.clone(), http),
        ))
    }
}

fn required(value: Option<String>, message: &str) -> std::result::Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::validation(message))
}

fn upstream_failure(endpoint: &str, err: Error) -> ApiError {
    error!("Request to /{} failed: {}", endpoint, err);
    err.into()
}

pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> std::result::Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let message = required(request.message, "Message is required")?;

    info!("Received chat message: {}", message);

    let plan = state
        .planner
        .plan(&message)
        .await
        .map_err(|e| upstream_failure("chat", e))?;

    Ok(Json(ChatResponse {
        reply: plan.reply,
        city: plan.city,
    }))
}

pub async fn weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> std::result::Result<Json<WeatherResponse>, ApiError> {
    let city = required(query.city, "City is required")?;

    let current = state
        .weather
        .current(&city)
        .await
        .map_err(|e| upstream_failure("weather", e))?
        .ok_or_else(|| ApiError::not_found("Weather not found"))?;

    Ok(Json(WeatherResponse {
        temperature: current.temperature,
        condition: current.condition,
        city: current.city.unwrap_or(city),
    }))
}

pub async fn hotels(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> std::result::Result<Json<Vec<Hotel>>, ApiError> {
    let city = required(query.city, "City is required")?;

    let location = state
        .geocoder
        .first(&city)
        .await
        .map_err(|e| upstream_failure("hotels", e))?
        .ok_or_else(|| ApiError::not_found("City not found"))?;

    let features = state
        .places
        .accommodations(&location.lat, &location.lon)
        .await
        .map_err(|e| upstream_failure("hotels", e))?;

    let hotels = hotels_from_features(features, &city, state.places.limit())
        .map_err(|e| upstream_failure("hotels", e))?;

    info!("Found {} hotels near {}", hotels.len(), city);

    Ok(Json(hotels))
}

pub async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
) -> std::result::Result<Json<GeocodeResponse>, ApiError> {
    let place = required(query.place, "Place is required")?;

    let candidate = state
        .geocoder
        .first(&place)
        .await
        .map_err(|e| upstream_failure("geocode", e))?
        .ok_or_else(|| ApiError::not_found("No results found"))?;

    Ok(Json(GeocodeResponse {
        name: candidate.display_name.unwrap_or(place),
        lat: candidate.lat,
        lon: candidate.lon,
    }))
}

/// Keeps upstream order, skips nameless or unlocated places, stops at `limit`.
pub fn hotels_from_features(
    features: Vec<Feature>,
    city: &str,
    limit: usize,
) -> Result<Vec<Hotel>> {
    let mut hotels = Vec::with_capacity(limit.min(features.len()));

    for feature in features {
        if hotels.len() == limit {
            break;
        }

        let name = feature.display_name();
        if name.is_empty() {
            continue;
        }

        let Some((lat, lon)) = feature.position() else {
            warn!("Skipping '{}': no coordinates", name);
            continue;
        };

        hotels.push(Hotel {
            name: name.to_string(),
            lat,
            lon,
            map_link: links::map_link(lat, lon),
            booking_link: links::booking_link(name, city)?,
            google_maps_link: links::google_maps_link(name, city)?,
        });
    }

    Ok(hotels)
}
