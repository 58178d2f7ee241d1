//! Configuration type definitions.
//!
//! This module contains the data structures used in movie-pages configuration files.
//! These types are pure data - no I/O or complex logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// =============================================================================
// Project config
// =============================================================================

/// The full project configuration.
///
/// YAML format:
/// ```yaml
/// input:
///   csv: movies.csv
///   template: template.html.txt
/// output:
///   dir: output
/// render:
///   escape_html: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Where the records and the page template are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the movies CSV file
    #[serde(default = "default_csv")]
    pub csv: PathBuf,

    /// Path to the page template
    #[serde(default = "default_template")]
    pub template: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            template: default_template(),
        }
    }
}

/// Where generated pages are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory. Cleared before every build.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Escape HTML-special characters in field values before substitution.
    /// Off by default: values are inserted verbatim.
    #[serde(default)]
    pub escape_html: bool,
}

pub(crate) fn default_csv() -> PathBuf {
    PathBuf::from("movies.csv")
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("template.html.txt")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Config {
    /// Make every relative path absolute by joining it onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.input.csv,
            &mut self.input.template,
            &mut self.output.dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
