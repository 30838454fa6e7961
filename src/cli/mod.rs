use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::scaffold::{AppType, Feature, Framework};

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "open-ai")]
    OpenAI,
    Mistral,
    Ollama,
}

#[derive(Parser, Debug)]
#[command(
    name = "shopforge",
    version,
    about = "Scaffold Shopify-style commerce apps from a feature checklist"
)]
pub struct Args {
    /// App type to scaffold.
    #[arg(long, value_enum, default_value_t = AppType::AdminApp)]
    pub app_type: AppType,

    /// Target framework.
    #[arg(long, value_enum, default_value_t = Framework::NodeJs)]
    pub framework: Framework,

    /// Feature toggle; repeat for multiple features.
    #[arg(long = "feature", value_enum)]
    pub features: Vec<Feature>,

    /// Free-text description of the app.
    #[arg(long)]
    pub description: Option<String>,

    /// Read the whole configuration from a JSON file instead of flags.
    #[arg(long)]
    pub request: Option<String>,

    /// Delegate generation to a remote backend instead of local assembly.
    /// Defaults to SHOPFORGE_PROVIDER when set.
    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    /// Override the backend's default model.
    #[arg(long)]
    pub model: Option<String>,

    /// Write generated files under this directory.
    #[arg(long)]
    pub out: Option<String>,

    /// Print the response envelope as JSON instead of a file tree.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the shopify.dev link for a topic and exit; repeatable.
    #[arg(long = "docs")]
    pub docs: Vec<String>,

    /// HTTP timeout for remote backends, in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Artificial latency before local assembly returns, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Optional TOML config file for backend URLs and models.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
