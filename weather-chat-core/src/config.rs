use anyhow::{Result, anyhow};

/// Default OpenAI-compatible chat completions endpoint.
pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model name for the chat completions endpoint.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default listen address for the HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Configuration for the chat language model.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Full URL of an OpenAI-compatible chat completions endpoint.
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// Top-level service configuration, loaded once at startup and never
/// mutated afterwards. Components receive it (or a sub-struct) by
/// reference; nothing reads the process environment mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub openweather_api_key: String,
    pub llm: LlmConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Missing required keys are a startup error, not something to
    /// discover on the first request.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Tests pass a closure over a map instead of mutating the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let openweather_api_key = required(&lookup, "OPENWEATHER_API_KEY")?;
        let llm_api_key = required(&lookup, "LLM_API_KEY")?;

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            openweather_api_key,
            llm: LlmConfig {
                api_url: lookup("LLM_API_URL").unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
                api_key: llm_api_key,
                model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            },
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).filter(|value| !value.trim().is_empty()).ok_or_else(|| {
        anyhow!(
            "{key} is not set.\n\
             Hint: export {key} or add it to a .env file next to the server."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn minimal_env_applies_defaults() {
        let vars = env(&[("OPENWEATHER_API_KEY", "OW_KEY"), ("LLM_API_KEY", "LLM_KEY")]);
        let cfg = Config::from_lookup(|key| vars.get(key).cloned()).expect("config must load");

        assert_eq!(cfg.openweather_api_key, "OW_KEY");
        assert_eq!(cfg.llm.api_key, "LLM_KEY");
        assert_eq!(cfg.llm.api_url, DEFAULT_LLM_API_URL);
        assert_eq!(cfg.llm.model, DEFAULT_LLM_MODEL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let vars = env(&[
            ("OPENWEATHER_API_KEY", "OW_KEY"),
            ("LLM_API_KEY", "LLM_KEY"),
            ("LLM_API_URL", "http://localhost:11434/v1/chat/completions"),
            ("LLM_MODEL", "llama3.2"),
            ("BIND_ADDR", "127.0.0.1:9999"),
        ]);
        let cfg = Config::from_lookup(|key| vars.get(key).cloned()).expect("config must load");

        assert_eq!(cfg.llm.api_url, "http://localhost:11434/v1/chat/completions");
        assert_eq!(cfg.llm.model, "llama3.2");
        assert_eq!(cfg.bind_addr, "127.0.0.1:9999");
    }

    #[test]
    fn missing_weather_key_is_an_error() {
        let vars = env(&[("LLM_API_KEY", "LLM_KEY")]);
        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();

        assert!(err.to_string().contains("OPENWEATHER_API_KEY is not set"));
    }

    #[test]
    fn missing_llm_key_is_an_error() {
        let vars = env(&[("OPENWEATHER_API_KEY", "OW_KEY")]);
        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();

        assert!(err.to_string().contains("LLM_API_KEY is not set"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let vars = env(&[("OPENWEATHER_API_KEY", "   "), ("LLM_API_KEY", "LLM_KEY")]);
        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();

        assert!(err.to_string().contains("OPENWEATHER_API_KEY is not set"));
    }
}
