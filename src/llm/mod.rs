// src/llm/mod.rs
// Seams for the two upstream generative APIs. Handlers depend on the traits,
// never on a concrete client, so tests can substitute scripted generators.

use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;
pub mod starry;

pub use gemini::GeminiClient;
pub use starry::StarryClient;

/// Outcome of one upstream text call.
///
/// `Malformed` is the recoverable case: the upstream answered but the body
/// did not carry a usable candidate. Transport and non-2xx failures are
/// `Err` and surface as HTTP 500 from the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOutcome {
    Text(String),
    Malformed,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<TextOutcome>;
}

/// Normalized result of one upstream image call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkOutput {
    pub image_url: Option<String>,
    pub generation_id: Option<String>,
}

#[async_trait]
pub trait ArtworkGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<ArtworkOutput>;
}

/// Environment lookup that treats blank values as unset.
pub(crate) fn get_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
