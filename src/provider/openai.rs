use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::ForgeError;
use crate::prompt;

/// OpenAI chat-completions backend. Bearer credential, system + user message,
/// model text comes back in `choices[0].message.content`.
pub struct OpenAi {
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
impl Provider for OpenAi {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(&self, prompt_text: &str, debug: bool) -> Result<String, ForgeError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ForgeError::BackendUnavailable(format!("OpenAI: {e}")))?;

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
            eprintln!("debug/openai: POST {}", url);
        }

        let resp = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("OpenAI: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ForgeError::BackendUnavailable(format!("OpenAI: {e}")))?;

        if debug {
            eprintln!("debug/openai: raw status: {}", status);
            eprintln!("debug/openai: raw body:\n{}", text);
        }

        if !status.is_success() {
            return Err(ForgeError::Http(format!("OpenAI API error: {status}")));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| ForgeError::MalformedResponse(format!("OpenAI response parse error: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ForgeError::MalformedResponse("OpenAI: empty choices".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: String) -> OpenAi {
        OpenAi {
            model: "gpt-4".into(),
            api_key: "test-key".into(),
            base_url,
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn returns_message_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"content":"{\"files\":{\"a.txt\":\"x\"}}"}}]}"#,
            )
            .create_async()
            .await;

        let raw = provider(server.url()).generate("scaffold please", false).await.expect("ok");
        assert!(raw.contains("\"files\""));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_surfaces_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let err = provider(server.url()).generate("scaffold please", false).await.unwrap_err();
        assert!(matches!(err, ForgeError::Http(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn empty_choices_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = provider(server.url()).generate("scaffold please", false).await.unwrap_err();
        assert!(matches!(err, ForgeError::MalformedResponse(_)));
    }
}
