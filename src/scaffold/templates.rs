//! Fragment table for the template assembler: fixed text for the base files,
//! the per-feature route blocks, and the framework/feature extras. Content is
//! template output for a generated Node app, never code this crate runs.

use super::{Configuration, Feature};

/// `package.json` with the description clamped to 100 characters plus an
/// ellipsis marker. The rest of the manifest is fixed.
pub fn package_json(description: &str) -> String {
    let short: String = description.chars().take(100).collect();
    // Serialize through Value so arbitrary description text is escaped.
    let desc = serde_json::Value::String(format!("{short}...")).to_string();
    format!(
        r#"{{
  "name": "shopify-app",
  "version": "1.0.0",
  "description": {desc},
  "main": "index.js",
  "scripts": {{
    "start": "node index.js",
    "dev": "nodemon index.js"
  }},
  "dependencies": {{
    "express": "^4.18.2",
    "dotenv": "^16.0.3"
  }},
  "devDependencies": {{
    "nodemon": "^2.0.22"
  }}
}}"#
    )
}

pub fn readme(config: &Configuration) -> String {
    format!(
        r#"# Shopify App

{description}

## Features
- App Type: {app_type}
- Framework: {framework}
- Features: {features}

## Setup
1. Install dependencies: `npm install`
2. Set up environment variables
3. Run the app: `npm start`

## Development
Run `npm run dev` for development with auto-reload.
"#,
        description = config.description,
        app_type = config.app_type.label(),
        framework = config.framework.label(),
        features = config.feature_list(),
    )
}

pub const ENV_EXAMPLE: &str = r#"# Shopify App Configuration
SHOPIFY_API_KEY=your_api_key_here
SHOPIFY_API_SECRET=your_api_secret_here
SHOPIFY_SCOPES=read_products,write_products
SHOPIFY_APP_URL=https://your-app-url.com
"#;

pub const ENTRY_HEAD: &str = r#"const express = require('express');
const dotenv = require('dotenv');

dotenv.config();

const app = express();
const PORT = process.env.PORT || 3000;

app.use(express.json());

// Basic health check
app.get('/health', (req, res) => {
  res.json({ status: 'ok', message: 'Shopify app is running' });
});
"#;

pub const ENTRY_TAIL: &str = r#"
app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});
"#;

const GRAPHQL_BLOCK: &str = r#"
// GraphQL endpoint
app.post('/graphql', async (req, res) => {
  try {
    // Handle GraphQL queries here
    res.json({ data: { message: 'GraphQL endpoint ready' } });
  } catch (error) {
    res.status(500).json({ error: error.message });
  }
});
"#;

const WEBHOOKS_BLOCK: &str = r#"
// Webhook endpoints
app.post('/webhooks/orders/create', (req, res) => {
  console.log('Order created:', req.body);
  res.status(200).send('OK');
});

app.post('/webhooks/products/update', (req, res) => {
  console.log('Product updated:', req.body);
  res.status(200).send('OK');
});
"#;

const OAUTH_BLOCK: &str = r#"
// OAuth endpoints
app.get('/auth', (req, res) => {
  // Redirect to Shopify OAuth
  const shop = req.query.shop;
  const authUrl = `https://${shop}/admin/oauth/authorize?client_id=${process.env.SHOPIFY_API_KEY}&scope=${process.env.SHOPIFY_SCOPES}&redirect_uri=${process.env.SHOPIFY_APP_URL}/auth/callback`;
  res.redirect(authUrl);
});

app.get('/auth/callback', (req, res) => {
  // Handle OAuth callback
  const { code, shop } = req.query;
  // Exchange code for access token
  res.json({ message: 'OAuth callback received' });
});
"#;

/// Route block a feature contributes to the entry point, if any. Polaris and
/// App Bridge ship component files instead of routes.
pub fn route_block(feature: Feature) -> Option<&'static str> {
    match feature {
        Feature::GraphQl => Some(GRAPHQL_BLOCK),
        Feature::Webhooks => Some(WEBHOOKS_BLOCK),
        Feature::OAuth => Some(OAUTH_BLOCK),
        Feature::Polaris | Feature::AppBridge => None,
    }
}

pub const REMIX_CONFIG: &str = r#"/** @type {import('@remix-run/dev').AppConfig} */
module.exports = {
  ignoredRouteFiles: ["**/.*"],
  serverModuleFormat: "cjs",
  serverDependenciesToBundle: [
    /^@shopify\/shopify-app-remix.*/,
  ],
};
"#;

pub const REMIX_ROOT: &str = r#"import { json } from "@remix-run/node";
import {
  Links,
  LiveReload,
  Meta,
  Outlet,
  Scripts,
  ScrollRestoration,
} from "@remix-run/react";

export const meta = () => ({
  charset: "utf-8",
  title: "Shopify App",
  viewport: "width=device-width,initial-scale=1",
});

export default function App() {
  return (
    <html>
      <head>
        <Meta />
        <Links />
      </head>
      <body>
        <Outlet />
        <ScrollRestoration />
        <Scripts />
        <LiveReload />
      </body>
    </html>
  );
}
"#;

pub const POLARIS_PROVIDER: &str = r#"import { AppProvider } from '@shopify/polaris';
import '@shopify/polaris/build/esm/styles.css';

export function PolarisProvider({ children }) {
  return (
    <AppProvider i18n={{}}>
      {children}
    </AppProvider>
  );
}
"#;

pub const APP_BRIDGE_PROVIDER: &str = r#"import { Provider } from '@shopify/app-bridge-react';

export function AppBridgeProvider({ children }) {
  const config = {
    apiKey: process.env.SHOPIFY_API_KEY,
    host: new URLSearchParams(window.location.search).get('host'),
    forceRedirect: true,
  };

  return (
    <Provider config={config}>
      {children}
    </Provider>
  );
}
"#;
