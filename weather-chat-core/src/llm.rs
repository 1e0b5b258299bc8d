use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openai;

/// Sampling temperature used by both pipeline call sites.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Errors from a chat-model call.
///
/// Unlike weather lookups, model failures are not absorbed into an
/// absence signal; the HTTP layer decides how to present them.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to model service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("model service returned no completion choices")]
    NoChoices,
}

/// A single-turn text completion capability.
///
/// Implementations must be thread-safe so one shared client can serve
/// concurrent requests. Tests substitute deterministic fakes.
#[async_trait]
pub trait ChatModel: Send + Sync + Debug {
    /// Send one prompt and return the model's raw text output.
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ModelError>;
}
