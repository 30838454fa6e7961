use crate::scaffold::Configuration;

/// System instruction shared by the chat-style backends. Ollama takes a bare
/// prompt, so the user prompt repeats the required output shape.
pub fn system_prompt() -> &'static str {
    r#"You are a Shopify app development expert. Generate complete app scaffolds based on user requirements. Return a JSON object with a "files" property containing file paths as keys and file contents as values."#
}

/// Serialize a configuration into the natural-language generation prompt.
pub fn build_prompt(config: &Configuration) -> String {
    format!(
        r##"Generate a Shopify app with these requirements:
- App Type: {app_type}
- Framework: {framework}
- Features: {features}
- Description: {description}

Return a JSON object with a 'files' property containing file paths as keys and file contents as values.

Example format:
{{
  "files": {{
    "package.json": "{{\"name\": \"shopify-app\", ...}}",
    "index.js": "const express = require('express'); ...",
    "README.md": "# Shopify App\n\n..."
  }}
}}"##,
        app_type = config.app_type.label(),
        framework = config.framework.label(),
        features = config.feature_list(),
        description = config.description,
    )
}
