//! Error types returned while resolving resources and loading root configuration.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Result alias used by resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors raised when a resource cannot be resolved or read.
#[derive(Debug, Error)]
pub enum ResourceError {
  /// The identifier does not resolve to any bundled resource.
  #[error("resource '{identifier}' is not resolvable")]
  NotFound {
    /// Identifier as supplied by the caller.
    identifier: String,
  },
  /// The resource resolved, but its location has no native filesystem path.
  #[error("resource URL '{url}' is not backed by a file")]
  NotFileBacked {
    /// Resolved location of the resource.
    url: Url,
  },
  /// Opening, reading, or decoding the resource failed.
  #[error("failed to read resource '{identifier}': {source}")]
  Io {
    /// Identifier of the resource being read.
    identifier: String,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
}

impl ResourceError {
  pub(crate) fn not_found(identifier: impl Into<String>) -> Self {
    Self::NotFound {
      identifier: identifier.into(),
    }
  }

  pub(crate) fn io(identifier: impl Into<String>, source: std::io::Error) -> Self {
    Self::Io {
      identifier: identifier.into(),
      source,
    }
  }

  /// Identifier the error refers to, when there is one.
  pub fn identifier(&self) -> Option<&str> {
    match self {
      Self::NotFound { identifier } | Self::Io { identifier, .. } => Some(identifier.as_str()),
      Self::NotFileBacked { .. } => None,
    }
  }
}

/// Errors that can occur while loading the root configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// Failed to parse the JSON configuration file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },
}
