//! Settings validation module
//!
//! This module provides validation logic for client settings beyond the
//! basic validator crate field rules.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};
use validator::Validate;

use crate::config::{ClientSettings, DeploymentVariant};
use crate::shared::error::AppError;
use crate::shared::logging::LoggingUtils;

static DOMAIN_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*$")
        .expect("domain prefix pattern is valid")
});

static CLIENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("client id pattern is valid"));

const AUTH0_SUFFIX: &str = ".auth0.com";

/// Settings validator for rules that depend on format or deployment variant
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate a settings record for the given variant
    pub fn validate(settings: &ClientSettings, variant: DeploymentVariant) -> crate::Result<()> {
        settings
            .validate()
            .map_err(|e| AppError::Validation(format!("Settings validation failed: {}", e)))?;

        Self::validate_production_flag(settings.production_mode, variant)?;
        Self::validate_url("api_server_url", &settings.api_server_url, variant)?;
        Self::validate_url("auth_callback_url", &settings.auth_callback_url, variant)?;
        Self::validate_domain_prefix(&settings.auth_domain_prefix)?;
        Self::validate_audience(&settings.auth_audience)?;
        Self::validate_client_id(&settings.auth_client_id)?;

        Ok(())
    }

    fn validate_production_flag(production_mode: bool, variant: DeploymentVariant) -> crate::Result<()> {
        if production_mode != variant.expects_production_mode() {
            return Err(AppError::Validation(format!(
                "production_mode is {} but the {} variant requires {}",
                production_mode,
                variant,
                variant.expects_production_mode()
            )));
        }
        Ok(())
    }

    fn validate_url(field: &str, value: &str, variant: DeploymentVariant) -> crate::Result<()> {
        let url = Url::parse(value)
            .map_err(|e| AppError::Validation(format!("{} is not a valid URL: {}", field, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AppError::Validation(format!(
                "{} must start with http:// or https://",
                field
            )));
        }

        let host = url
            .host()
            .ok_or_else(|| AppError::Validation(format!("{} must include a host", field)))?;
        let loopback = Self::is_loopback(&host);

        match variant {
            DeploymentVariant::Production => {
                if loopback {
                    return Err(AppError::Validation(format!(
                        "{} must not point at a loopback host in production",
                        field
                    )));
                }
                if url.scheme() != "https" {
                    return Err(AppError::Validation(format!(
                        "{} must use HTTPS in production",
                        field
                    )));
                }
            }
            DeploymentVariant::Development => {
                if !loopback && url.scheme() != "https" {
                    LoggingUtils::log_settings_warning(variant, field, "non-local host over plain HTTP");
                }
            }
        }

        Ok(())
    }

    fn is_loopback(host: &Host<&str>) -> bool {
        match host {
            Host::Domain(domain) => *domain == "localhost" || domain.ends_with(".localhost"),
            Host::Ipv4(ip) => ip.is_loopback(),
            Host::Ipv6(ip) => ip.is_loopback(),
        }
    }

    fn validate_domain_prefix(prefix: &str) -> crate::Result<()> {
        if prefix.contains("://") {
            return Err(AppError::Validation(
                "auth_domain_prefix must not include a URL scheme".to_string(),
            ));
        }

        if prefix.ends_with(AUTH0_SUFFIX) {
            return Err(AppError::Validation(format!(
                "auth_domain_prefix must not include the {} suffix",
                AUTH0_SUFFIX
            )));
        }

        if !DOMAIN_PREFIX_RE.is_match(prefix) {
            return Err(AppError::Validation(format!(
                "auth_domain_prefix '{}' is not a valid tenant domain prefix",
                prefix
            )));
        }

        Ok(())
    }

    fn validate_audience(audience: &str) -> crate::Result<()> {
        if audience.chars().any(char::is_whitespace) {
            return Err(AppError::Validation(
                "auth_audience must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_client_id(client_id: &str) -> crate::Result<()> {
        if !CLIENT_ID_RE.is_match(client_id) {
            return Err(AppError::Validation(
                "auth_client_id contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }
}
