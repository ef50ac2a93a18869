//! Layered settings loading
//!
//! Sources, lowest precedence first: built-in development defaults, the shared
//! `Settings` file, the variant file, inline TOML, then `COFFEE_SHOP__*`
//! environment variables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::validation::SettingsValidator;
use crate::config::{ClientSettings, DeploymentVariant};
use crate::shared::error::AppError;

/// Default directory holding `Settings.*` and the variant files
pub const DEFAULT_CONFIG_DIR: &str = "settings";

/// Default prefix of overriding environment variables
pub const DEFAULT_ENV_PREFIX: &str = "COFFEE_SHOP";

/// Environment variable that selects the deployment variant
pub const VARIANT_ENV_VAR: &str = "COFFEE_SHOP_VARIANT";

/// Builder that assembles the configuration sources for one variant
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    variant: DeploymentVariant,
    config_dir: PathBuf,
    env_prefix: String,
    env_vars: Option<HashMap<String, String>>,
    inline_toml: Option<String>,
}

impl SettingsLoader {
    /// Create a loader for `variant` with default sources
    pub fn new(variant: DeploymentVariant) -> Self {
        Self {
            variant,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            env_vars: None,
            inline_toml: None,
        }
    }

    /// Read `Settings.*` and `<variant>.*` from `dir`
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read overrides from `vars` instead of the process environment
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Add an inline TOML layer above the files
    pub fn with_toml(mut self, toml: impl Into<String>) -> Self {
        self.inline_toml = Some(toml.into());
        self
    }

    /// Variant this loader reads
    pub fn variant(&self) -> DeploymentVariant {
        self.variant
    }

    /// Load, deserialize and validate the settings
    pub fn load(&self) -> crate::Result<ClientSettings> {
        let mut builder = config::Config::builder();

        if self.variant.has_builtin_defaults() {
            builder = Self::with_defaults(builder, &ClientSettings::default())?;
        }

        let shared = self.file_stem("Settings");
        let variant_file = self.file_stem(self.variant.as_str());
        debug!(
            variant = %self.variant,
            shared = %shared,
            variant_file = %variant_file,
            required = !self.variant.has_builtin_defaults(),
            "Assembling settings sources"
        );

        builder = builder
            .add_source(config::File::with_name(&shared).required(false))
            .add_source(config::File::with_name(&variant_file).required(!self.variant.has_builtin_defaults()));

        if let Some(toml) = &self.inline_toml {
            builder = builder.add_source(config::File::from_str(toml, config::FileFormat::Toml));
        }

        let mut environment = config::Environment::with_prefix(&self.env_prefix).separator("__");
        if let Some(vars) = &self.env_vars {
            environment = environment.source(Some(vars.clone().into_iter().collect()));
        }
        builder = builder.add_source(environment);

        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build {} settings: {}", self.variant, e)))?;

        let settings: ClientSettings = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize {} settings: {}", self.variant, e)))?;

        SettingsValidator::validate(&settings, self.variant)?;

        Ok(settings)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        defaults: &ClientSettings,
    ) -> crate::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(builder
            .set_default("production_mode", defaults.production_mode)?
            .set_default("api_server_url", defaults.api_server_url.clone())?
            .set_default("auth_domain_prefix", defaults.auth_domain_prefix.clone())?
            .set_default("auth_audience", defaults.auth_audience.clone())?
            .set_default("auth_client_id", defaults.auth_client_id.clone())?
            .set_default("auth_callback_url", defaults.auth_callback_url.clone())?)
    }

    fn file_stem(&self, name: &str) -> String {
        path_string(&self.config_dir.join(name))
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
