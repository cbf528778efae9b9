use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub place: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub temperature: Number,
    pub condition: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hotel {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub map_link: String,
    pub booking_link: String,
    pub google_maps_link: String,
}

#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub name: String,
    pub lat: String,
    pub lon: String,
}
