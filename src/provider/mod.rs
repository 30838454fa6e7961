use std::time::Duration;

use async_trait::async_trait;

use crate::cli::ProviderKind;
use crate::config::Config;
use crate::errors::ForgeError;

pub mod mistral;
pub mod ollama;
pub mod openai;

/// A remote generation backend: natural-language prompt in, raw model text
/// out. Parsing the text into a FileMapping is the caller's problem (wire).
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(&self, prompt: &str, debug: bool) -> Result<String, ForgeError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Registry keyed by provider identifier. Fails up front with
/// `BackendUnavailable` when the backend needs a credential that is not
/// configured, so the user hears about it before any network round-trip.
pub fn make_provider(
    kind: ProviderKind,
    cfg: &Config,
    model_override: Option<&str>,
) -> Result<DynProvider, ForgeError> {
    let timeout = Duration::from_secs(cfg.timeout_secs);
    match kind {
        ProviderKind::OpenAI => {
            let api_key = cfg.openai_api_key.clone().ok_or_else(|| {
                ForgeError::BackendUnavailable(
                    "OpenAI API key not found (set OPENAI_API_KEY)".into(),
                )
            })?;
            Ok(Box::new(openai::OpenAi {
                model: model_override.unwrap_or(&cfg.openai_model).to_string(),
                api_key,
                base_url: cfg.openai_base_url.clone(),
                timeout,
            }))
        }
        ProviderKind::Mistral => {
            let api_key = cfg.mistral_api_key.clone().ok_or_else(|| {
                ForgeError::BackendUnavailable(
                    "Mistral API key not found (set MISTRAL_API_KEY)".into(),
                )
            })?;
            Ok(Box::new(mistral::Mistral {
                model: model_override.unwrap_or(&cfg.mistral_model).to_string(),
                api_key,
                base_url: cfg.mistral_base_url.clone(),
                timeout,
            }))
        }
        // Ollama is local, no credential needed.
        ProviderKind::Ollama => Ok(Box::new(ollama::Ollama {
            model: model_override.unwrap_or(&cfg.ollama_model).to_string(),
            base_url: cfg.ollama_base_url.clone(),
            timeout,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_backend_unavailable() {
        let cfg = Config { openai_api_key: None, ..Config::default() };
        let err = make_provider(ProviderKind::OpenAI, &cfg, None).err().expect("must fail");
        assert!(matches!(err, ForgeError::BackendUnavailable(_)));
        assert!(err.to_string().contains("OpenAI"));
    }

    #[test]
    fn ollama_needs_no_credential() {
        let cfg = Config::default();
        let prov = make_provider(ProviderKind::Ollama, &cfg, Some("codellama")).expect("builds");
        assert_eq!(prov.name(), "Ollama");
    }

    #[test]
    fn model_override_wins_over_config_default() {
        let cfg = Config { mistral_api_key: Some("k".into()), ..Config::default() };
        let prov = make_provider(ProviderKind::Mistral, &cfg, Some("mistral-large-latest"));
        assert!(prov.is_ok());
    }
}
