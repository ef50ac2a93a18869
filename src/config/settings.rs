//! Client settings record
//!
//! This module contains the settings the client application is built with.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use validator::Validate;

/// Environment settings of the client application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClientSettings {
    /// Production deployment tier flag
    pub production_mode: bool,

    /// Base URL of the coffee shop API (e.g., "http://localhost:5000")
    #[validate(url, length(min = 1))]
    pub api_server_url: String,

    /// Auth0 tenant domain prefix, without the ".auth0.com" suffix
    #[validate(length(min = 1))]
    pub auth_domain_prefix: String,

    /// Audience the identity provider issues tokens for
    #[validate(length(min = 1))]
    pub auth_audience: String,

    /// Public client identifier of the registered application
    #[validate(length(min = 1))]
    pub auth_client_id: String,

    /// Where the identity provider redirects after login
    #[validate(url, length(min = 1))]
    pub auth_callback_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            production_mode: false,
            api_server_url: "http://localhost:5000".to_string(),
            auth_domain_prefix: "cjohannb.eu".to_string(),
            auth_audience: "coffee_shop".to_string(),
            auth_client_id: "z6gGY5dSYnpfy2p9BcuisyYtyLb8tsNO".to_string(),
            auth_callback_url: "http://localhost:8100".to_string(),
        }
    }
}

impl ClientSettings {
    /// Field names in declaration order
    pub const FIELD_NAMES: [&'static str; 6] = [
        "production_mode",
        "api_server_url",
        "auth_domain_prefix",
        "auth_audience",
        "auth_client_id",
        "auth_callback_url",
    ];

    /// Name/value pairs in declaration order
    pub fn entries(&self) -> [(&'static str, String); 6] {
        [
            ("production_mode", self.production_mode.to_string()),
            ("api_server_url", self.api_server_url.clone()),
            ("auth_domain_prefix", self.auth_domain_prefix.clone()),
            ("auth_audience", self.auth_audience.clone()),
            ("auth_client_id", self.auth_client_id.clone()),
            ("auth_callback_url", self.auth_callback_url.clone()),
        ]
    }

    /// Hex SHA-256 over the length-prefixed name/value pairs.
    ///
    /// Equal records always produce equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (name, value) in self.entries() {
            hasher.update((name.len() as u64).to_be_bytes());
            hasher.update(name.as_bytes());
            hasher.update((value.len() as u64).to_be_bytes());
            hasher.update(value.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
