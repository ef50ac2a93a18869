//! Deployment variants
//!
//! A variant names the build/deploy target a settings record is produced for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::AppError;

/// Deployment target the settings are loaded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentVariant {
    #[default]
    Development,
    Production,
}

impl DeploymentVariant {
    /// All known variants
    pub const ALL: [DeploymentVariant; 2] = [DeploymentVariant::Development, DeploymentVariant::Production];

    /// Canonical lowercase name, also the variant file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentVariant::Development => "development",
            DeploymentVariant::Production => "production",
        }
    }

    /// Value `production_mode` must carry for this variant
    pub fn expects_production_mode(&self) -> bool {
        matches!(self, DeploymentVariant::Production)
    }

    /// Whether built-in defaults may seed this variant
    pub fn has_builtin_defaults(&self) -> bool {
        matches!(self, DeploymentVariant::Development)
    }
}

impl fmt::Display for DeploymentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(DeploymentVariant::Development),
            "production" | "prod" => Ok(DeploymentVariant::Production),
            other => Err(AppError::UnknownVariant(other.to_string())),
        }
    }
}
