// src/daily/fetch.rs
// The client leg of the prompt flow: one POST to the generate-prompt proxy
// per rotation slot.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

#[async_trait]
pub trait PromptFetcher: Send + Sync {
    /// One daily-prompt request against the proxy, returning its `response`
    /// text.
    async fn fetch_daily(&self) -> Result<String>;
}

pub struct HttpPromptFetcher {
    client: Client,
    endpoint: String,
}

impl HttpPromptFetcher {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!(
                "{}/functions/generate-prompt",
                base_url.trim_end_matches('/')
            ),
        }
    }
}

#[async_trait]
impl PromptFetcher for HttpPromptFetcher {
    async fn fetch_daily(&self) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "promptType": "daily" }))
            .send()
            .await
            .context("Failed to reach generate-prompt proxy")?;

        if !response.status().is_success() {
            anyhow::bail!("generate-prompt proxy returned {}", response.status());
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to decode generate-prompt body")?;

        body["response"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("generate-prompt body missing response text"))
    }
}
