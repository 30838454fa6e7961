use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::ForgeError;

/// Local Ollama backend. No credential; takes a bare prompt on
/// `/api/generate` and answers with a single `response` string.
pub struct Ollama {
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct GenRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenOptions,
}

#[derive(Serialize)]
struct GenOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenResponse {
    response: String,
}

#[async_trait]
impl Provider for Ollama {
    fn name(&self) -> &'static str {
        "Ollama"
    }

    async fn generate(&self, prompt_text: &str, debug: bool) -> Result<String, ForgeError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ForgeError::BackendUnavailable(format!("Ollama: {e}")))?;

        let body = GenRequest {
            model: &self.model,
            prompt: prompt_text,
            stream: false,
            options: GenOptions { temperature: 0.7, num_predict: 4000 },
        };

        if debug {
            eprintln!("debug/ollama: POST {}", url);
        }

        let resp = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("Ollama: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("Ollama: {e}")))?;

        if debug {
            eprintln!("debug/ollama: raw body:\n{}", text);
        }

        if !status.is_success() {
            return Err(ForgeError::Http(format!("Ollama API error: {status}")));
        }

        let parsed: GenResponse = serde_json::from_str(&text).map_err(|e| {
            ForgeError::MalformedResponse(format!("Ollama response parse error: {e}"))
        })?;

        Ok(parsed.response)
    }
}
