//! Integration tests: variant files on disk through provider and renderer

use std::collections::HashMap;

use crate::{
    config::{ClientSettings, DeploymentVariant},
    provider::SettingsProvider,
    render::{EnvironmentRenderer, RenderFormat},
    shared::error::AppError,
    tests::{
        config,
        fixtures::{production_settings, SettingsDir, PRODUCTION_TOML},
        TestResult,
    },
};

#[test]
fn test_production_variant_loads_from_file() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    dir.write("production", PRODUCTION_TOML);

    let provider = SettingsProvider::from_loader(&dir.loader(DeploymentVariant::Production))?;
    assert_eq!(provider.variant(), DeploymentVariant::Production);
    assert_eq!(provider.get_settings(), production_settings());
    Ok(())
}

#[test]
fn test_load_from_dir() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    dir.write("production", PRODUCTION_TOML);

    let provider = SettingsProvider::load_from_dir(DeploymentVariant::Production, dir.path())?;
    assert!(provider.settings().production_mode);
    Ok(())
}

#[test]
fn test_missing_field_is_detected_before_use() {
    config::init();
    let dir = SettingsDir::new();
    dir.write(
        "production",
        &PRODUCTION_TOML.replace("auth_client_id = \"z6gGY5dSYnpfy2p9BcuisyYtyLb8tsNO\"\n", ""),
    );

    let err = SettingsProvider::from_loader(&dir.loader(DeploymentVariant::Production)).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("auth_client_id"), "{}", err);
}

#[test]
fn test_shared_file_layers_under_variant_file() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    dir.write("Settings", "auth_audience = \"coffee_shop_shared\"\nauth_domain_prefix = \"shared-tenant\"\n");
    dir.write("development", "auth_domain_prefix = \"dev-tenant\"\n");

    let settings = dir.loader(DeploymentVariant::Development).load()?;
    assert_eq!(settings.auth_audience, "coffee_shop_shared");
    assert_eq!(settings.auth_domain_prefix, "dev-tenant");
    assert_eq!(settings.api_server_url, "http://localhost:5000");
    Ok(())
}

#[test]
fn test_environment_overrides_variant_file() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    dir.write("production", PRODUCTION_TOML);

    let mut vars = HashMap::new();
    vars.insert(
        "COFFEE_SHOP__API_SERVER_URL".to_string(),
        "https://api2.coffee.example.com".to_string(),
    );

    let settings = dir
        .loader(DeploymentVariant::Production)
        .with_env_vars(vars)
        .load()?;
    assert_eq!(settings.api_server_url, "https://api2.coffee.example.com");
    assert_eq!(settings.auth_callback_url, "https://coffee.example.com");
    Ok(())
}

#[test]
fn test_environment_cannot_flip_production_flag() {
    config::init();
    let dir = SettingsDir::new();

    let mut vars = HashMap::new();
    vars.insert("COFFEE_SHOP__PRODUCTION_MODE".to_string(), "true".to_string());

    let err = dir
        .loader(DeploymentVariant::Development)
        .with_env_vars(vars)
        .load()
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_production_file_with_local_urls_is_rejected() {
    config::init();
    let dir = SettingsDir::new();
    dir.write(
        "production",
        &PRODUCTION_TOML.replace("https://coffee.example.com", "http://localhost:8100"),
    );

    let err = dir.loader(DeploymentVariant::Production).load().unwrap_err();
    assert!(err.to_string().contains("auth_callback_url"), "{}", err);
}

#[test]
fn test_variants_share_field_set() -> TestResult<()> {
    let development = serde_json::to_value(ClientSettings::default())?;
    let production = serde_json::to_value(production_settings())?;

    let dev_keys: Vec<&String> = development.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    let prod_keys: Vec<&String> = production.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    assert_eq!(dev_keys, prod_keys);
    assert_ne!(development, production);
    Ok(())
}

#[test]
fn test_rendered_toml_loads_back() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    let rendered = EnvironmentRenderer::render(&production_settings(), RenderFormat::Toml)?;
    dir.write("production", &rendered);

    let settings = dir.loader(DeploymentVariant::Production).load()?;
    assert_eq!(settings, production_settings());
    Ok(())
}

#[test]
fn test_write_production_environment_file() -> TestResult<()> {
    config::init();
    let dir = SettingsDir::new();
    dir.write("production", PRODUCTION_TOML);
    let provider = SettingsProvider::from_loader(&dir.loader(DeploymentVariant::Production))?;

    let target = dir
        .path()
        .join("out")
        .join(RenderFormat::TypeScript.file_name(provider.variant()));
    EnvironmentRenderer::write_to(provider.settings(), RenderFormat::TypeScript, &target)?;

    let written = std::fs::read_to_string(&target)?;
    assert!(target.ends_with("environment.prod.ts"));
    assert!(written.contains("production: true,"));
    assert!(written.contains("apiServerUrl: 'https://api.coffee.example.com',"));
    assert!(written.contains(&provider.settings().fingerprint()));
    Ok(())
}
