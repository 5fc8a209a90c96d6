//! Directory-backed resource roots searched in order, like entries on a classpath.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use url::Url;

use super::ResourceSource;
use super::filters::is_remote_reference;
use crate::config::RootsConfig;
use crate::identifier::{SEPARATOR, normalize};

/// Environment variable holding a platform path list of resource roots.
pub const ROOTS_ENV_VAR: &str = "BUNDLED_RESOURCES_PATH";

/// Ordered set of directories that bundled resources are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceRoots {
  roots: Vec<PathBuf>,
}

impl ResourceRoots {
  /// Create a source searching `roots` first to last.
  pub fn new<I, P>(roots: I) -> Self
  where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
  {
    Self {
      roots: roots.into_iter().map(Into::into).collect(),
    }
  }

  /// Build roots from the configuration file in `base_dir`, falling back to defaults.
  pub fn discover(base_dir: &Path) -> Self {
    Self::new(RootsConfig::discover(base_dir).root_dirs(base_dir))
  }

  /// Roots listed in [`ROOTS_ENV_VAR`], or discovered next to the running executable.
  pub fn from_env() -> Self {
    if let Some(value) = env::var_os(ROOTS_ENV_VAR) {
      let roots: Vec<PathBuf> = env::split_paths(&value)
        .filter(|root| !root.as_os_str().is_empty())
        .collect();
      if !roots.is_empty() {
        return Self::new(roots);
      }
    }

    let base_dir = env::current_exe()
      .ok()
      .and_then(|exe| exe.parent().map(Path::to_path_buf))
      .unwrap_or_else(|| PathBuf::from("."));
    debug!(base_dir = %base_dir.display(), "discovering resource roots beside executable");
    Self::discover(&base_dir)
  }

  /// Append a root searched after every existing one.
  pub fn push(&mut self, root: impl Into<PathBuf>) {
    self.roots.push(root.into());
  }

  /// Root directories in search order.
  pub fn roots(&self) -> &[PathBuf] {
    &self.roots
  }

  /// Native path of the first existing match for `identifier`.
  pub fn find(&self, identifier: &str) -> Option<PathBuf> {
    if is_remote_reference(identifier) {
      debug!(identifier, "refusing to resolve remote reference");
      return None;
    }

    let Some(normalized) = normalize(identifier) else {
      debug!(identifier, "identifier escapes the resource root");
      return None;
    };
    let relative = normalized.trim_start_matches(SEPARATOR);

    self.roots.iter().find_map(|root| {
      let candidate = if relative.is_empty() {
        root.clone()
      } else {
        root.join(relative)
      };
      trace!(candidate = %candidate.display(), "probing resource root");
      candidate.exists().then_some(candidate)
    })
  }
}

impl ResourceSource for ResourceRoots {
  fn locate(&self, identifier: &str) -> Option<Url> {
    let path = self.find(identifier)?;
    let absolute = std::path::absolute(&path).ok()?;
    Url::from_file_path(absolute).ok()
  }
}
