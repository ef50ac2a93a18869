//! Shared utilities and common functionality
//!
//! This module contains error handling and logging used across the crate.

pub mod error;
pub mod logging;

pub use error::{AppError, AppResult};
pub use logging::{LogFormat, LoggingUtils};
