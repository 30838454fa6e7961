use fs_err as fs;
use serde::{Deserialize, Serialize};

/// Runtime configuration for the remote backends and the latency contract.
/// Base URLs, models, and credentials are opaque strings passed through to
/// the providers unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub openai_base_url: String,
    pub openai_model: String,
    pub mistral_base_url: String,
    pub mistral_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub timeout_secs: u64,
    /// Artificial delay before local assembly returns, in milliseconds.
    pub delay_ms: u64,
    #[serde(skip)]
    pub openai_api_key: Option<String>,
    #[serde(skip)]
    pub mistral_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_base_url: "https://api.openai.com/v1".into(),
            openai_model: "gpt-4".into(),
            mistral_base_url: "https://api.mistral.ai/v1".into(),
            mistral_model: "mistral-medium-latest".into(),
            ollama_base_url: "http://localhost:11434".into(),
            ollama_model: "mistral".into(),
            timeout_secs: 120,
            delay_ms: 2000,
            openai_api_key: None,
            mistral_api_key: None,
        }
    }
}

impl Config {
    /// Defaults, overlaid with an optional TOML file, then the environment
    /// (credentials are env-only; they never live in the config file).
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut cfg: Config = match path {
            Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
            None => Config::default(),
        };
        cfg.read_env();
        Ok(cfg)
    }

    fn read_env(&mut self) {
        self.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        self.mistral_api_key = std::env::var("MISTRAL_API_KEY").ok();
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            self.ollama_base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_catalog() {
        let cfg = Config::default();
        assert_eq!(cfg.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.mistral_model, "mistral-medium-latest");
        assert_eq!(cfg.ollama_base_url, "http://localhost:11434");
        assert_eq!(cfg.delay_ms, 2000);
    }

    #[test]
    fn toml_overlay_keeps_unmentioned_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            openai_model = "gpt-3.5-turbo"
            delay_ms = 0
            "#,
        )
        .expect("parses");
        assert_eq!(cfg.openai_model, "gpt-3.5-turbo");
        assert_eq!(cfg.delay_ms, 0);
        assert_eq!(cfg.ollama_model, "mistral");
    }
}
