//! Configuration loading from files, the environment and the command line.
//!
//! Sources are layered in increasing priority: built-in defaults, the YAML
//! config file, `MOVIE_PAGES_*` environment variables, command line flags.

use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::{Config, ConfigError};
use crate::util::{absolutize, base_path_from_config};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "movie-pages.yaml";

/// Prefix for environment overrides, e.g. `MOVIE_PAGES_INPUT__CSV`.
pub const ENV_PREFIX: &str = "MOVIE_PAGES";

/// Values passed on the command line. Every `Some` wins over all other sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub csv: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub escape_html: Option<bool>,
}

impl ConfigOverrides {
    /// Apply the overrides. Relative paths resolve against `cwd`.
    fn apply(&self, config: &mut Config, cwd: &Path) {
        if let Some(csv) = &self.csv {
            config.input.csv = absolutize(csv, cwd);
        }
        if let Some(template) = &self.template {
            config.input.template = absolutize(template, cwd);
        }
        if let Some(output) = &self.output {
            config.output.dir = absolutize(output, cwd);
        }
        if let Some(escape_html) = self.escape_html {
            config.render.escape_html = escape_html;
        }
    }
}

impl Config {
    /// Load the config from the command line arguments.
    ///
    /// Without an explicit `config_file`, `movie-pages.yaml` in the working
    /// directory is used if it exists. An explicit file must exist.
    pub fn load_from_arg(
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CwdFailure)?;
        let (config_file, required) = match config_file {
            Some(path) => (absolutize(path, &cwd), true),
            None => (cwd.join(DEFAULT_CONFIG_FILE), false),
        };

        let mut config = Self::load_from_file(&config_file, required)?;
        overrides.apply(&mut config, &cwd);
        Ok(config)
    }

    /// Load the config from a file path, with environment overrides applied.
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        Self::load_layered(path, required, environment())
    }

    /// Load the file and environment layers, then resolve relative paths
    /// against the config file's directory.
    pub(crate) fn load_layered(
        path: &Path,
        required: bool,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        if required && !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let mut config = config::Config::builder()
            .add_source(File::new(path_str, FileFormat::Yaml).required(required))
            .add_source(env)
            .build()?
            .try_deserialize::<Config>()?;

        config.resolve_paths(&base_path_from_config(path));
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn env_from(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(source))
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = Config::load_layered(&path, false, env_from(&[])).unwrap();
        assert_eq!(config.input.csv, dir.path().join("movies.csv"));
        assert_eq!(config.input.template, dir.path().join("template.html.txt"));
        assert_eq!(config.output.dir, dir.path().join("output"));
        assert!(!config.render.escape_html);
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");

        let err = Config::load_layered(&path, true, env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_file_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(
            &path,
            "input:\n  csv: data/peliculas.csv\noutput:\n  dir: /srv/salida\n",
        )
        .unwrap();

        let config = Config::load_layered(&path, true, env_from(&[])).unwrap();
        assert_eq!(config.input.csv, dir.path().join("data/peliculas.csv"));
        assert_eq!(config.input.template, dir.path().join("template.html.txt"));
        assert_eq!(config.output.dir, PathBuf::from("/srv/salida"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "output:\n  dir: from-file\n").unwrap();

        let env = env_from(&[
            ("MOVIE_PAGES_OUTPUT__DIR", "from-env"),
            ("MOVIE_PAGES_RENDER__ESCAPE_HTML", "true"),
        ]);
        let config = Config::load_layered(&path, true, env).unwrap();
        assert_eq!(config.output.dir, dir.path().join("from-env"));
        assert!(config.render.escape_html);
    }

    #[test]
    fn test_overrides_resolve_against_cwd() {
        let mut config = Config::default();
        config.resolve_paths(Path::new("/project"));

        let overrides = ConfigOverrides {
            csv: Some(PathBuf::from("other.csv")),
            output: Some(PathBuf::from("/tmp/pages")),
            escape_html: Some(true),
            ..Default::default()
        };
        overrides.apply(&mut config, Path::new("/home/me"));

        assert_eq!(config.input.csv, PathBuf::from("/home/me/other.csv"));
        assert_eq!(
            config.input.template,
            PathBuf::from("/project/template.html.txt")
        );
        assert_eq!(config.output.dir, PathBuf::from("/tmp/pages"));
        assert!(config.render.escape_html);
    }
}
