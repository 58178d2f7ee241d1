//! Configuration loading and types for movie-pages.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Layered loading from file, environment and flags (`load`)

mod load;
mod types;

use std::path::PathBuf;

pub use load::{ConfigOverrides, DEFAULT_CONFIG_FILE};
pub use types::Config;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("config path is not valid UTF-8: {}", .0.display())]
    EncodePath(PathBuf),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
}
