use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Body of a `POST /chat` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// A current-weather observation for a city, taken verbatim from the
/// provider response.
///
/// Temperature and wind speed keep the provider's own JSON number
/// rendering (`15` stays `15`, `4.0` stays `4.0`), so formatted output is
/// stable regardless of float display defaults.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReading {
    /// The city name as the caller supplied it, not the provider's
    /// resolved location name.
    pub city: String,
    pub temperature_c: Number,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: Number,
}

impl WeatherReading {
    /// Human-readable one-line summary, as fed to the response generation
    /// step and echoed back to the client.
    pub fn summary(&self) -> String {
        format!(
            "Temperature: {}°C, Condition: {}, Humidity: {}%, Wind Speed: {} m/s.",
            self.temperature_c, self.condition, self.humidity_pct, self.wind_speed_mps,
        )
    }
}

/// Body of a successful `POST /chat` response.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    /// Generated natural-language answer.
    pub response: String,
    /// City the answer is about.
    pub city: String,
    /// The summary string the generation step saw.
    pub weather: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> WeatherReading {
        WeatherReading {
            city: "Paris".to_string(),
            temperature_c: Number::from(15),
            condition: "clear sky".to_string(),
            humidity_pct: 40,
            wind_speed_mps: Number::from_f64(4.0).expect("finite"),
        }
    }

    #[test]
    fn summary_matches_documented_format() {
        assert_eq!(
            reading().summary(),
            "Temperature: 15°C, Condition: clear sky, Humidity: 40%, Wind Speed: 4.0 m/s."
        );
    }

    #[test]
    fn summary_preserves_provider_number_rendering() {
        // An integral float from the provider must not collapse to "4",
        // and an integer must not grow a ".0".
        let r = WeatherReading {
            temperature_c: Number::from_f64(21.5).expect("finite"),
            wind_speed_mps: Number::from(3),
            ..reading()
        };

        assert_eq!(
            r.summary(),
            "Temperature: 21.5°C, Condition: clear sky, Humidity: 40%, Wind Speed: 3 m/s."
        );
    }

}
