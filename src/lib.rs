//! Coffee shop settings - environment configuration for the coffee shop client
//!
//! This library loads the client's environment settings once for a deployment
//! variant, validates them, and renders them into the environment files the
//! client build substitutes per target.

pub mod config;
pub mod identity;
pub mod provider;
pub mod render;
pub mod shared;

#[cfg(test)]
mod tests;

pub use crate::config::{ClientSettings, DeploymentVariant, SettingsLoader};
pub use crate::identity::IdentityProviderEndpoints;
pub use crate::provider::SettingsProvider;
pub use crate::render::{EnvironmentRenderer, RenderFormat};
pub use crate::shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
