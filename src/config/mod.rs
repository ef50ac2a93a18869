//! Configuration management module
//!
//! This module handles loading, validation, and the data model of the
//! client environment settings.

pub mod loader;
pub mod settings;
pub mod validation;
pub mod variant;

pub use loader::{SettingsLoader, DEFAULT_CONFIG_DIR, DEFAULT_ENV_PREFIX, VARIANT_ENV_VAR};
pub use settings::ClientSettings;
pub use validation::SettingsValidator;
pub use variant::DeploymentVariant;
