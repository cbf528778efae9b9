use crate::{Result, config::WeatherConfig};
use serde::Deserialize;
use serde_json::Number;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius, exactly as the upstream wrote the number.
    pub temperature: Number,
    pub condition: String,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    #[serde(default)]
    main: Option<OpenWeatherMain>,
    #[serde(default)]
    weather: Vec<OpenWeatherCondition>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    #[serde(default)]
    temp: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    #[serde(default)]
    description: Option<String>,
}

impl OpenWeatherResponse {
    fn into_current(self) -> Option<CurrentWeather> {
        let temperature = self.main?.temp?;
        let condition = self.weather.into_iter().next()?.description?;

        Some(CurrentWeather {
            temperature,
            condition,
            city: self.name.filter(|name| !name.is_empty()),
        })
    }
}

/// Current conditions by city name from an OpenWeatherMap-compatible API.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// `None` when the upstream rejects the city or omits the temperature or
    /// the condition text.
    pub async fn current(&self, city: &str) -> Result<Option<CurrentWeather>> {
        debug!("Fetching current weather for: {}", city);

        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Weather lookup for {} returned status {}", city, status);
            return Ok(None);
        }

        let body: OpenWeatherResponse = response.json().await?;
        Ok(body.into_current())
    }
}
