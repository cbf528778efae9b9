use crate::{Result, config::GeocodingConfig};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use tracing::debug;

/// One Nominatim search hit. Coordinates are kept as the strings Nominatim returns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub display_name: Option<String>,
    pub lat: String,
    pub lon: String,
}

impl GeocodeCandidate {
    /// First comma-separated token of the display name, e.g. `Paris` for
    /// `Paris, Île-de-France, France`.
    pub fn leading_name(&self) -> Option<String> {
        let name = self.display_name.as_deref()?.split(',').next()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

/// Free-text geocoding against a Nominatim-compatible search endpoint.
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl GeocodingClient {
    pub fn new(config: GeocodingConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
        }
    }

    /// Candidates in upstream ranking order; empty when nothing matched.
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>> {
        debug!("Geocoding query: {}", query);

        let candidates: Vec<GeocodeCandidate> = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(USER_AGENT, &self.user_agent)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Geocoding returned {} candidates", candidates.len());

        Ok(candidates)
    }

    pub async fn first(&self, query: &str) -> Result<Option<GeocodeCandidate>> {
        Ok(self.search(query).await?.into_iter().next())
    }
}
