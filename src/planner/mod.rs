mod city;
pub mod prompts;

pub use city::{CitySource, extract_city};

use crate::{
    Error, Result,
    geo::GeocodingClient,
    llm::{ChatCompletionRequest, LlmClient},
};
use prompts::{GREETING_REPLY, GREETINGS, ITINERARY_PROMPT, ITINERARY_TEMPERATURE};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlan {
    pub reply: String,
    pub city: Option<String>,
}

/// Turns a free-text travel request into an itinerary plus the city it is about.
pub struct TripPlanner {
    llm: Arc<dyn LlmClient>,
    geocoder: Arc<GeocodingClient>,
}

pub fn is_greeting(message: &str) -> bool {
    let message = message.trim();
    GREETINGS
        .iter()
        .any(|greeting| message.eq_ignore_ascii_case(greeting))
}

impl TripPlanner {
    pub fn new(llm: Arc<dyn LlmClient>, geocoder: Arc<GeocodingClient>) -> Self {
        Self { llm, geocoder }
    }

    pub async fn plan(&self, message: &str) -> Result<TripPlan> {
        if is_greeting(message) {
            return Ok(TripPlan {
                reply: GREETING_REPLY.to_string(),
                city: None,
            });
        }

        let reply = self.itinerary(message).await?;
        let city = extract_city(self.llm.as_ref(), &self.geocoder, message).await;

        info!("Planned trip, detected city: {:?}", city);

        Ok(TripPlan { reply, city })
    }

    async fn itinerary(&self, message: &str) -> Result<String> {
        let response = self
            .llm
            .create_chat_completion(ChatCompletionRequest::instructed(
                ITINERARY_PROMPT,
                message,
                ITINERARY_TEMPERATURE,
            ))
            .await?;

        let reply = response
            .first_content()
            .ok_or_else(|| Error::llm("Model returned no choices"))?;

        if reply.trim().is_empty() {
            return Err(Error::llm("Model returned an empty itinerary"));
        }

        Ok(reply.to_string())
    }
}
