//! HTTP client for the completion service.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use reel_core::config::ReelConfig;

use crate::protocol::{GenerateRequest, GenerateResponse};

/// The text-completion capability: one string in, one string out.
///
/// Passed into the app as a trait object so tests can substitute a
/// deterministic stub for the real HTTP service. Failures are not
/// differentiated by kind; any error means the generation failed.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Client for the completion service HTTP API.
pub struct CompletionClient {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: usize,
}

impl CompletionClient {
    pub fn new(base_url: String, model: String, max_tokens: usize, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url,
            model,
            max_tokens,
        }
    }

    pub fn from_config(config: &ReelConfig) -> Self {
        Self::new(
            config.service.base_url.clone(),
            config.generation.model.clone(),
            config.generation.max_tokens,
            config.service.timeout_seconds,
        )
    }
}

#[async_trait]
impl CompletionService for CompletionClient {
    #[instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let req = GenerateRequest {
            prompt: prompt.to_string(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
        };
        let resp = self.client.post(&url).json(&req).send().await?;
        let result: GenerateResponse = resp.error_for_status()?.json().await?;
        debug!("Received completion: {} chars", result.text.len());
        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A stub that records its calls and echoes a canned response.
    struct EchoService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionService for EchoService {
        async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("echo:{}", prompt.len()))
        }
    }

    #[tokio::test]
    async fn trait_object_is_substitutable() {
        let service: std::sync::Arc<dyn CompletionService> = std::sync::Arc::new(EchoService {
            calls: AtomicUsize::new(0),
        });
        let out = service.generate("hello").await.unwrap();
        assert_eq!(out, "echo:5");
    }
}
