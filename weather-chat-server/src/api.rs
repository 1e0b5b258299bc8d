use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

use weather_chat_core::llm::openai::OpenAiChatModel;
use weather_chat_core::provider::openweather::OpenWeatherProvider;
use weather_chat_core::{
    ChatModel, ChatOutcome, ChatPipeline, ChatRequest, Config, WeatherProvider, WeatherReading,
};

/// Shared, read-only state: one weather client and one chat pipeline,
/// cloned per request.
#[derive(Clone)]
pub struct AppState {
    weather: Arc<dyn WeatherProvider>,
    pipeline: ChatPipeline,
}

impl AppState {
    pub fn new(weather: Arc<dyn WeatherProvider>, model: Arc<dyn ChatModel>) -> Self {
        Self {
            pipeline: ChatPipeline::new(model, Arc::clone(&weather)),
            weather,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let weather: Arc<dyn WeatherProvider> =
            Arc::new(OpenWeatherProvider::new(config.openweather_api_key.clone())?);
        let model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(&config.llm)?);

        Ok(Self::new(weather, model))
    }
}

/// Both routes answer `200 OK` for the documented error branches; the
/// client tells success from failure by the presence of an `error` field.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(weather))
        .route("/chat", post(chat))
        // Arbitrary frontend origins are expected; this is not a security
        // boundary.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: String,
}

/// Weather rendered for the HTTP response, unit suffixes attached.
#[derive(Debug, Serialize)]
struct WeatherReport {
    city: String,
    temperature: String,
    condition: String,
    humidity: String,
    wind_speed: String,
}

impl From<WeatherReading> for WeatherReport {
    fn from(r: WeatherReading) -> Self {
        Self {
            city: r.city,
            temperature: format!("{}°C", r.temperature_c),
            condition: r.condition,
            humidity: format!("{}%", r.humidity_pct),
            wind_speed: format!("{} m/s", r.wind_speed_mps),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

impl ErrorReply {
    fn new(error: impl Into<String>) -> Json<Self> {
        Json(Self { error: error.into() })
    }
}

async fn weather(State(state): State<AppState>, Query(params): Query<WeatherParams>) -> Response {
    match state.weather.current_weather(&params.city).await {
        Some(reading) => Json(WeatherReport::from(reading)).into_response(),
        None => {
            ErrorReply::new(format!("Could not fetch weather data for {}.", params.city))
                .into_response()
        }
    }
}

async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    match state.pipeline.answer(&request.query).await {
        Ok(ChatOutcome::Answered(reply)) => Json(reply).into_response(),
        Ok(ChatOutcome::UnknownCity) => {
            ErrorReply::new("I couldn't understand the city name. Please ask again.")
                .into_response()
        }
        Ok(ChatOutcome::WeatherUnavailable { city }) => {
            ErrorReply::new(format!("Sorry, I couldn't fetch the weather data for {city}."))
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, "model call failed");
            ErrorReply::new("The assistant is temporarily unavailable. Please try again later.")
                .into_response()
        }
    }
}
