use crate::{Result, config::PlacesConfig};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// GeoJSON order: longitude first.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl Feature {
    /// Upstream omits `name` for some places; those are listed as `Unnamed`.
    /// An explicitly empty name stays empty.
    pub fn display_name(&self) -> &str {
        self.properties.name.as_deref().unwrap_or("Unnamed")
    }

    /// `(lat, lon)` of the point geometry.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self.geometry.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lat, *lon)),
            _ => None,
        }
    }
}

/// Radius search against an OpenTripMap-compatible points-of-interest API.
pub struct PlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    radius_meters: u32,
    kinds: String,
    limit: usize,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            radius_meters: config.radius_meters,
            kinds: config.kinds,
            limit: config.limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Lodging around the coordinate, in upstream order. Coordinates are passed
    /// through verbatim so the geocoder's precision is preserved.
    pub async fn accommodations(&self, lat: &str, lon: &str) -> Result<Vec<Feature>> {
        debug!(
            "Searching {} within {} m of ({}, {})",
            self.kinds, self.radius_meters, lat, lon
        );

        let query = [
            ("radius", self.radius_meters.to_string()),
            ("lon", lon.to_string()),
            ("lat", lat.to_string()),
            ("kinds", self.kinds.clone()),
            ("limit", self.limit.to_string()),
            ("apikey", self.api_key.clone()),
        ];

        let collection: FeatureCollection = self
            .client
            .get(format!("{}/radius", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Places search returned {} features", collection.features.len());

        Ok(collection.features)
    }
}
