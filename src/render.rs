//! Environment renderer
//!
//! Emits a settings record in the shapes the client build substitutes per
//! deployment target.

use serde::Serialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::config::{ClientSettings, DeploymentVariant};
use crate::shared::error::AppError;

/// Output format of a rendered environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    Json,
    #[default]
    TypeScript,
    Toml,
}

impl RenderFormat {
    /// Conventional file name for `variant`
    pub fn file_name(&self, variant: DeploymentVariant) -> &'static str {
        match (self, variant) {
            (RenderFormat::TypeScript, DeploymentVariant::Development) => "environment.ts",
            (RenderFormat::TypeScript, DeploymentVariant::Production) => "environment.prod.ts",
            (RenderFormat::Json, DeploymentVariant::Development) => "environment.json",
            (RenderFormat::Json, DeploymentVariant::Production) => "environment.prod.json",
            (RenderFormat::Toml, DeploymentVariant::Development) => "development.toml",
            (RenderFormat::Toml, DeploymentVariant::Production) => "production.toml",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(RenderFormat::Json),
            "ts" | "typescript" => Ok(RenderFormat::TypeScript),
            "toml" => Ok(RenderFormat::Toml),
            other => Err(AppError::Render(format!("Unsupported output format: {}", other))),
        }
    }
}

#[derive(Serialize)]
struct EnvironmentDocument<'a> {
    production: bool,
    #[serde(rename = "apiServerUrl")]
    api_server_url: &'a str,
    auth0: Auth0Document<'a>,
}

#[derive(Serialize)]
struct Auth0Document<'a> {
    url: &'a str,
    audience: &'a str,
    #[serde(rename = "clientId")]
    client_id: &'a str,
    #[serde(rename = "callbackURL")]
    callback_url: &'a str,
}

impl<'a> From<&'a ClientSettings> for EnvironmentDocument<'a> {
    fn from(settings: &'a ClientSettings) -> Self {
        Self {
            production: settings.production_mode,
            api_server_url: &settings.api_server_url,
            auth0: Auth0Document {
                url: &settings.auth_domain_prefix,
                audience: &settings.auth_audience,
                client_id: &settings.auth_client_id,
                callback_url: &settings.auth_callback_url,
            },
        }
    }
}

/// Renders settings records into environment files
pub struct EnvironmentRenderer;

impl EnvironmentRenderer {
    /// Render `settings` in `format`
    pub fn render(settings: &ClientSettings, format: RenderFormat) -> crate::Result<String> {
        match format {
            RenderFormat::Json => Self::render_json(settings),
            RenderFormat::TypeScript => Ok(Self::render_typescript(settings)),
            RenderFormat::Toml => Self::render_toml(settings),
        }
    }

    /// Render and write to `path`, creating parent directories
    pub fn write_to(settings: &ClientSettings, format: RenderFormat, path: &Path) -> crate::Result<()> {
        let rendered = Self::render(settings, format)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, rendered)?;
        info!(
            path = %path.display(),
            fingerprint = %settings.fingerprint(),
            "Environment written"
        );
        Ok(())
    }

    fn render_json(settings: &ClientSettings) -> crate::Result<String> {
        let mut out = serde_json::to_string_pretty(&EnvironmentDocument::from(settings))?;
        out.push('\n');
        Ok(out)
    }

    fn render_typescript(settings: &ClientSettings) -> String {
        format!(
            "// Generated by coffee-shop-settings for the {tier} build.\n\
             // fingerprint: {fingerprint}\n\
             \n\
             export const environment = {{\n\
             \x20 production: {production},\n\
             \x20 apiServerUrl: {api},\n\
             \x20 auth0: {{\n\
             \x20   url: {domain},\n\
             \x20   audience: {audience},\n\
             \x20   clientId: {client_id},\n\
             \x20   callbackURL: {callback},\n\
             \x20 }}\n\
             }};\n",
            tier = Self::tier(settings),
            fingerprint = settings.fingerprint(),
            production = settings.production_mode,
            api = ts_string(&settings.api_server_url),
            domain = ts_string(&settings.auth_domain_prefix),
            audience = ts_string(&settings.auth_audience),
            client_id = ts_string(&settings.auth_client_id),
            callback = ts_string(&settings.auth_callback_url),
        )
    }

    fn render_toml(settings: &ClientSettings) -> crate::Result<String> {
        let body = toml::to_string(settings)?;
        Ok(format!("# fingerprint: {}\n{}", settings.fingerprint(), body))
    }

    fn tier(settings: &ClientSettings) -> &'static str {
        if settings.production_mode {
            "production"
        } else {
            "development"
        }
    }
}

/// Single-quoted TypeScript string literal
fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
