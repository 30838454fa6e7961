use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::ForgeError;

pub mod templates;

/// Relative forward-slash path -> full file content.
pub type FileMapping = BTreeMap<String, String>;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    #[value(alias = "admin")]
    AdminApp,
    #[value(alias = "storefront")]
    StorefrontExtension,
    #[value(alias = "theme")]
    ThemeApp,
}

impl AppType {
    pub fn label(&self) -> &'static str {
        match self {
            AppType::AdminApp => "Admin App",
            AppType::StorefrontExtension => "Storefront Extension",
            AppType::ThemeApp => "Theme App",
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    #[value(alias = "node", alias = "nodejs")]
    NodeJs,
    Remix,
    Rails,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::NodeJs => "Node.js",
            Framework::Remix => "Remix",
            Framework::Rails => "Rails",
        }
    }
}

/// Declaration order is the canonical order for entry-point route blocks
/// (GraphQL, Webhooks, OAuth) followed by the component-file features.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[value(name = "graphql")]
    #[serde(rename = "graphql")]
    GraphQl,
    #[value(name = "webhooks")]
    #[serde(rename = "webhooks")]
    Webhooks,
    #[value(name = "oauth")]
    #[serde(rename = "oauth")]
    OAuth,
    #[value(name = "polaris")]
    #[serde(rename = "polaris")]
    Polaris,
    #[value(name = "app-bridge", alias = "appbridge")]
    #[serde(rename = "app-bridge")]
    AppBridge,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::GraphQl,
        Feature::Webhooks,
        Feature::OAuth,
        Feature::Polaris,
        Feature::AppBridge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::GraphQl => "GraphQL",
            Feature::Webhooks => "Webhooks",
            Feature::OAuth => "OAuth",
            Feature::Polaris => "Polaris",
            Feature::AppBridge => "App Bridge",
        }
    }
}

/// One scaffold request, as the form or the JSON payload describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub app_type: AppType,
    pub framework: Framework,
    #[serde(default)]
    pub features: BTreeSet<Feature>,
    pub description: String,
}

impl Configuration {
    pub fn validate(&self) -> Result<(), ForgeError> {
        if self.description.trim().is_empty() {
            return Err(ForgeError::Validation("description must not be empty".into()));
        }
        Ok(())
    }

    /// Feature labels joined in canonical order, for README interpolation.
    pub fn feature_list(&self) -> String {
        self.features
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Assemble the scaffold for `config`. Pure and deterministic: the same
/// configuration always yields a byte-identical mapping.
///
/// Write order is base files, then framework extras, then feature extras;
/// the fragment table is arranged so no two rules share a path (covered by
/// a test over the full configuration product).
pub fn assemble(config: &Configuration) -> FileMapping {
    let mut files = FileMapping::new();

    // Base set, independent of configuration.
    files.insert("package.json".into(), templates::package_json(&config.description));
    files.insert("README.md".into(), templates::readme(config));
    files.insert(".env.example".into(), templates::ENV_EXAMPLE.to_string());
    files.insert("index.js".into(), entry_point(&config.features));

    // Framework-specific extras.
    if config.framework == Framework::Remix {
        files.insert("remix.config.js".into(), templates::REMIX_CONFIG.to_string());
        files.insert("app/root.jsx".into(), templates::REMIX_ROOT.to_string());
    }

    // Feature-specific extras.
    if config.features.contains(&Feature::Polaris) {
        files.insert(
            "components/PolarisProvider.jsx".into(),
            templates::POLARIS_PROVIDER.to_string(),
        );
    }
    if config.features.contains(&Feature::AppBridge) {
        files.insert(
            "components/AppBridgeProvider.jsx".into(),
            templates::APP_BRIDGE_PROVIDER.to_string(),
        );
    }

    files
}

/// Entry-point skeleton plus the route blocks for the enabled features,
/// appended in canonical order regardless of how the set was built.
fn entry_point(features: &BTreeSet<Feature>) -> String {
    let mut blocks = String::new();
    for feature in Feature::ALL {
        if !features.contains(&feature) {
            continue;
        }
        if let Some(block) = templates::route_block(feature) {
            blocks.push_str(block);
        }
    }
    format!("{}{}{}", templates::ENTRY_HEAD, blocks, templates::ENTRY_TAIL)
}
