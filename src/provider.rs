//! Settings provider
//!
//! Holds the settings record loaded once at startup and hands it out
//! read-only. Clones share the same record.

use std::path::Path;
use std::sync::Arc;

use crate::config::{ClientSettings, DeploymentVariant, SettingsLoader, SettingsValidator};
use crate::identity::IdentityProviderEndpoints;
use crate::shared::logging::LoggingUtils;

/// Read-only access to the loaded client settings
#[derive(Debug, Clone)]
pub struct SettingsProvider {
    variant: DeploymentVariant,
    settings: Arc<ClientSettings>,
}

impl SettingsProvider {
    /// Load the settings for `variant` from the default sources
    pub fn load(variant: DeploymentVariant) -> crate::Result<Self> {
        Self::from_loader(&SettingsLoader::new(variant))
    }

    /// Load the settings for `variant` from the files in `dir`
    pub fn load_from_dir(variant: DeploymentVariant, dir: impl AsRef<Path>) -> crate::Result<Self> {
        Self::from_loader(&SettingsLoader::new(variant).with_config_dir(dir.as_ref()))
    }

    /// Load through a configured loader
    pub fn from_loader(loader: &SettingsLoader) -> crate::Result<Self> {
        let settings = loader.load()?;
        LoggingUtils::log_settings_loaded(loader.variant(), &settings);
        Ok(Self {
            variant: loader.variant(),
            settings: Arc::new(settings),
        })
    }

    /// Wrap an already constructed record after validating it
    pub fn from_settings(variant: DeploymentVariant, settings: ClientSettings) -> crate::Result<Self> {
        SettingsValidator::validate(&settings, variant)?;
        Ok(Self {
            variant,
            settings: Arc::new(settings),
        })
    }

    /// The complete settings record
    pub fn get_settings(&self) -> ClientSettings {
        self.settings.as_ref().clone()
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Shared handle for consumers that outlive the provider
    pub fn shared(&self) -> Arc<ClientSettings> {
        Arc::clone(&self.settings)
    }

    pub fn variant(&self) -> DeploymentVariant {
        self.variant
    }

    /// Identity-provider endpoints derived from the auth settings
    pub fn identity_provider(&self) -> IdentityProviderEndpoints {
        IdentityProviderEndpoints::new(self.shared())
    }
}
