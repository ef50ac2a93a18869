//! Cross-module test suite
//!
//! Covers loading settings from variant files on disk, environment overrides,
//! and rendering loaded settings back into environment files.

pub mod fixtures;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }
}

/// Test result type
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
