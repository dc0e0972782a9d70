use anyhow::{Context, Result};

/// Model (Azure deployment) used when `OPENAI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    // Hosted model (Azure OpenAI)
    pub api_key: String,
    pub api_version: String,
    pub azure_endpoint: String,
    pub openai_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: std::env::var("API_KEY").context("API_KEY not set")?,
            api_version: std::env::var("API_VERSION").context("API_VERSION not set")?,
            azure_endpoint: std::env::var("AZURE_ENDPOINT").context("AZURE_ENDPOINT not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Full chat-completions URL for the configured deployment
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.azure_endpoint.trim_end_matches('/'),
            self.openai_model,
            self.api_version
        )
    }
}
