//! Settings fixtures and a temporary settings directory

use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use crate::config::{ClientSettings, DeploymentVariant, SettingsLoader};

pub const PRODUCTION_TOML: &str = r#"
production_mode = true
api_server_url = "https://api.coffee.example.com"
auth_domain_prefix = "cjohannb.eu"
auth_audience = "coffee_shop"
auth_client_id = "z6gGY5dSYnpfy2p9BcuisyYtyLb8tsNO"
auth_callback_url = "https://coffee.example.com"
"#;

/// Production record matching `PRODUCTION_TOML`
pub fn production_settings() -> ClientSettings {
    ClientSettings {
        production_mode: true,
        api_server_url: "https://api.coffee.example.com".to_string(),
        auth_domain_prefix: "cjohannb.eu".to_string(),
        auth_audience: "coffee_shop".to_string(),
        auth_client_id: "z6gGY5dSYnpfy2p9BcuisyYtyLb8tsNO".to_string(),
        auth_callback_url: "https://coffee.example.com".to_string(),
    }
}

/// A temporary directory laid out like the `settings/` directory
pub struct SettingsDir {
    dir: TempDir,
}

impl SettingsDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp settings dir"),
        }
    }

    /// Write `<name>.toml`
    pub fn write(&self, name: &str, contents: &str) -> &Self {
        fs::write(self.dir.path().join(format!("{}.toml", name)), contents).expect("write settings file");
        self
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// Loader over this directory with an empty environment
    pub fn loader(&self, variant: DeploymentVariant) -> SettingsLoader {
        SettingsLoader::new(variant)
            .with_config_dir(self.path())
            .with_env_vars(HashMap::new())
    }
}
