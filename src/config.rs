//! Root configuration loader describing where bundled resources live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// File name searched for when discovering configuration in a directory.
pub const DEFAULT_CONFIG_FILE: &str = "bundled_resources.json";

/// Discoverable configuration listing the resource roots, in search order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RootsConfig {
    /// Root directories, relative to the configuration file's directory unless absolute.
    pub roots: Vec<PathBuf>,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("resources")],
        }
    }
}

impl RootsConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to the
    /// default roots so callers can keep resolving resources.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::load_from_path(&candidate) {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "falling back to default resource roots");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Root directories with relative entries joined onto `base`.
    pub fn root_dirs(&self, base: &Path) -> Vec<PathBuf> {
        self.roots.iter().map(|root| base.join(root)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_resources_directory() {
        let config = RootsConfig::default();
        assert_eq!(config.roots, vec![PathBuf::from("resources")]);
    }

    #[test]
    fn load_from_path_returns_default_for_missing_file() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = RootsConfig::load_from_path(temp.path().join(DEFAULT_CONFIG_FILE))
            .expect("missing files should not produce an error");
        assert_eq!(config, RootsConfig::default());
    }

    #[test]
    fn load_from_path_reads_configuration() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"roots": ["assets", "/opt/shared"]}"#)
            .expect("failed to write config file");

        let config = RootsConfig::load_from_path(&path).expect("configuration should load");
        assert_eq!(
            config.roots,
            vec![PathBuf::from("assets"), PathBuf::from("/opt/shared")]
        );
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "{ not json").expect("failed to write config file");

        let err = RootsConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn discover_falls_back_on_invalid_file() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "[1, 2")
            .expect("failed to write config file");

        assert_eq!(RootsConfig::discover(temp.path()), RootsConfig::default());
    }

    #[test]
    fn root_dirs_join_relative_entries() {
        let config = RootsConfig {
            roots: vec![PathBuf::from("assets")],
        };
        let base = Path::new("base");
        assert_eq!(config.root_dirs(base), vec![base.join("assets")]);
    }

    #[test]
    fn empty_object_uses_default_roots() {
        let config: RootsConfig = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(config, RootsConfig::default());
    }
}
