use super::prompts::{CITY_EXTRACTION_PROMPT, CITY_EXTRACTION_TEMPERATURE};
use crate::{
    Result,
    geo::GeocodingClient,
    llm::{ChatCompletionRequest, LlmClient},
};
use tracing::{debug, warn};

/// Where a city name can come from, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySource {
    Model,
    Geocoder,
}

impl CitySource {
    pub const ORDER: [CitySource; 2] = [CitySource::Model, CitySource::Geocoder];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Geocoder => "geocoder",
        }
    }

    async fn attempt(
        self,
        llm: &dyn LlmClient,
        geocoder: &GeocodingClient,
        message: &str,
    ) -> Result<Option<String>> {
        match self {
            Self::Model => from_model(llm, message).await,
            Self::Geocoder => from_geocoder(geocoder, message).await,
        }
    }
}

/// Best effort: every failure is logged and the next source is tried.
pub async fn extract_city(
    llm: &dyn LlmClient,
    geocoder: &GeocodingClient,
    message: &str,
) -> Option<String> {
    for source in CitySource::ORDER {
        match source.attempt(llm, geocoder, message).await {
            Ok(Some(city)) => {
                debug!("City '{}' resolved by {}", city, source.as_str());
                return Some(city);
            }
            Ok(None) => debug!("No city from {}", source.as_str()),
            Err(e) => warn!("City extraction via {} failed: {}", source.as_str(), e),
        }
    }

    None
}

async fn from_model(llm: &dyn LlmClient, message: &str) -> Result<Option<String>> {
    let response = llm
        .create_chat_completion(ChatCompletionRequest::instructed(
            CITY_EXTRACTION_PROMPT,
            message,
            CITY_EXTRACTION_TEMPERATURE,
        ))
        .await?;

    Ok(response
        .first_content()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(str::to_string))
}

async fn from_geocoder(geocoder: &GeocodingClient, message: &str) -> Result<Option<String>> {
    Ok(geocoder
        .first(message)
        .await?
        .and_then(|candidate| candidate.leading_name()))
}
