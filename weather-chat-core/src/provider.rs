use crate::model::WeatherReading;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather observations.
///
/// `None` is the absence signal: any non-success status or transport
/// failure is absorbed here, never surfaced to the caller. No retries.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Option<WeatherReading>;
}
