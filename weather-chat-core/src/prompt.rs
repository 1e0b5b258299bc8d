//! Fixed prompt templates for the two language-model call sites.
//!
//! Templates are filled verbatim; no escaping or truncation is applied to
//! user input before it is embedded.

/// Prompt asking the model to pull a city name out of a free-text
/// weather question.
pub fn extraction_prompt(query: &str) -> String {
    format!("Extract the city name from this weather-related question: {query}")
}

/// Prompt asking the model to phrase a natural-language answer from the
/// original question, the resolved city, and a formatted weather summary.
pub fn generation_prompt(query: &str, city: &str, weather_info: &str) -> String {
    format!(
        "User asked: {query}\n\
         Weather data for {city}: {weather_info}\n\
         Based on this, generate a natural response answering the user's question."
    )
}
