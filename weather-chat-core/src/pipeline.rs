use std::sync::Arc;
use tracing::{debug, info};

use crate::llm::{ChatModel, DEFAULT_TEMPERATURE, ModelError};
use crate::model::ChatReply;
use crate::prompt;
use crate::provider::WeatherProvider;

/// Terminal state of one chat request.
#[derive(Debug, Clone)]
pub enum ChatOutcome {
    /// The full pipeline ran and produced an answer.
    Answered(ChatReply),
    /// Extraction produced no city; weather and generation were skipped.
    UnknownCity,
    /// The weather provider had nothing for the city; generation was
    /// skipped.
    WeatherUnavailable { city: String },
}

/// The chat pipeline: city extraction, weather fetch, response
/// generation, run strictly in order. Each stage gates the next.
///
/// Holds no per-request state; one pipeline serves concurrent requests.
#[derive(Debug, Clone)]
pub struct ChatPipeline {
    model: Arc<dyn ChatModel>,
    weather: Arc<dyn WeatherProvider>,
}

impl ChatPipeline {
    pub fn new(model: Arc<dyn ChatModel>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { model, weather }
    }

    /// Answer a free-text weather question.
    ///
    /// Model-call failures propagate as `Err`; the two documented early
    /// exits are `Ok` outcomes, not errors.
    pub async fn answer(&self, query: &str) -> Result<ChatOutcome, ModelError> {
        if query.trim().is_empty() {
            return Ok(ChatOutcome::UnknownCity);
        }

        let city = self.extract_city(query).await?;
        if city.is_empty() {
            return Ok(ChatOutcome::UnknownCity);
        }

        let Some(reading) = self.weather.current_weather(&city).await else {
            return Ok(ChatOutcome::WeatherUnavailable { city });
        };

        let weather = reading.summary();
        let response = self.generate_response(query, &city, &weather).await?;

        Ok(ChatOutcome::Answered(ChatReply {
            response,
            city,
            weather,
        }))
    }

    /// Ask the model which city the question is about. Output is trimmed;
    /// an empty result means the city was not understood.
    pub async fn extract_city(&self, query: &str) -> Result<String, ModelError> {
        let text = self
            .model
            .complete(&prompt::extraction_prompt(query), DEFAULT_TEMPERATURE)
            .await?;

        let city = text.trim().to_string();
        info!(city, "extracted city from query");
        Ok(city)
    }

    /// Ask the model to phrase the final answer. Output is returned raw.
    pub async fn generate_response(
        &self,
        query: &str,
        city: &str,
        weather_info: &str,
    ) -> Result<String, ModelError> {
        debug!(city, "generating response");
        self.model
            .complete(
                &prompt::generation_prompt(query, city, weather_info),
                DEFAULT_TEMPERATURE,
            )
            .await
    }
}
