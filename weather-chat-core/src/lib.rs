//! Core library for the weather chat service.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Abstraction over the chat language model
//! - Prompt templates and the chat pipeline
//! - Shared domain models (requests, responses)
//!
//! It is used by `weather-chat-server`, but can also be reused by other
//! binaries or services.

pub mod config;
pub mod llm;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod provider;

pub use config::{Config, LlmConfig};
pub use llm::{ChatModel, ModelError};
pub use model::{ChatReply, ChatRequest, WeatherReading};
pub use pipeline::{ChatOutcome, ChatPipeline};
pub use provider::WeatherProvider;
