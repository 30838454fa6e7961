use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::ForgeError;
use crate::prompt;

/// Mistral AI backend. Speaks the same chat-completions dialect as OpenAI at
/// a different base URL with its own credential.
pub struct Mistral {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    content: String,
}

#[async_trait]
impl Provider for Mistral {
    fn name(&self) -> &'static str {
        "Mistral"
    }

    async fn generate(&self, prompt_text: &str, debug: bool) -> Result<String, ForgeError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ForgeError::BackendUnavailable(format!("Mistral: {e}")))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Msg { role: "system", content: prompt::system_prompt() },
                Msg { role: "user", content: prompt_text },
            ],
            temperature: 0.7,
            max_tokens: 4000,
        };

        if debug {
            eprintln!("debug/mistral: POST {}", url);
        }

        let resp = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("Mistral: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("Mistral: {e}")))?;

        if debug {
            eprintln!("debug/mistral: raw status: {}", status);
        }

        if !status.is_success() {
            return Err(ForgeError::Http(format!("Mistral API error: {status}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            ForgeError::MalformedResponse(format!("Mistral response parse error: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ForgeError::MalformedResponse("Mistral: empty choices".into()))
    }
}
