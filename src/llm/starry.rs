//! StarryAI image generation client.
//!
//! Fixed canvas and style parameters; the only variable input is the prompt
//! built from mood and entry content. Non-2xx responses carry the upstream
//! body text back as the error.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::{ArtworkGenerator, ArtworkOutput, get_env_var};
use crate::config::CONFIG;

const IMAGE_HEIGHT: u32 = 512;
const IMAGE_WIDTH: u32 = 512;
const CFG_SCALE: u32 = 7;
const STYLE_PRESET: &str = "digital-art";

pub struct StarryClient {
    client: Client,
    api_key: String,
    url: String,
    timeout: Duration,
}

impl StarryClient {
    pub fn from_env() -> Result<Self> {
        let api_key = get_env_var("STARRY_AI_API_KEY")
            .ok_or_else(|| anyhow::anyhow!("STARRY_AI_API_KEY not set"))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            url: CONFIG.artwork_generation_url(),
            timeout: CONFIG.upstream_timeout(),
        })
    }
}

#[derive(Serialize)]
struct StarryRequest<'a> {
    prompt: &'a str,
    height: u32,
    width: u32,
    cfg_scale: u32,
    style_preset: &'static str,
}

#[derive(Deserialize)]
struct StarryResponse {
    id: Option<Value>,
    output: Option<Vec<StarryImage>>,
}

#[derive(Deserialize)]
struct StarryImage {
    image_url: Option<String>,
}

fn normalize(response: StarryResponse) -> ArtworkOutput {
    let image_url = response
        .output
        .and_then(|images| images.into_iter().next())
        .and_then(|image| image.image_url);

    // Upstream ids arrive as numbers or strings depending on the account tier
    let generation_id = response.id.map(|id| match id {
        Value::String(s) => s,
        other => other.to_string(),
    });

    ArtworkOutput {
        image_url,
        generation_id,
    }
}

#[async_trait]
impl ArtworkGenerator for StarryClient {
    async fn generate(&self, prompt: &str) -> Result<ArtworkOutput> {
        let api_request = StarryRequest {
            prompt,
            height: IMAGE_HEIGHT,
            width: IMAGE_WIDTH,
            cfg_scale: CFG_SCALE,
            style_preset: STYLE_PRESET,
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .json(&api_request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("StarryAI API error: {} {}", status, body);
        }

        let api_response: StarryResponse = response.json().await?;
        Ok(normalize(api_response))
    }
}
