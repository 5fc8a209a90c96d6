//! Low-level resolution of resource identifiers into URLs, files, streams, and strings.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::error::{ResourceError, Result};
use crate::identifier::{ensure_leading_separator, from_native_path};
use crate::resource_path::ResourcePath;
use crate::source::{ResourceRoots, ResourceSource};

/// Resolves identifiers against a [`ResourceSource`] without caching anything.
///
/// Cloning is cheap; clones share the same source.
#[derive(Debug)]
pub struct ResourceAccessor<S = ResourceRoots> {
  source: Arc<S>,
}

impl<S> Clone for ResourceAccessor<S> {
  fn clone(&self) -> Self {
    Self {
      source: Arc::clone(&self.source),
    }
  }
}

impl ResourceAccessor<ResourceRoots> {
  /// Accessor over [`ResourceRoots::from_env`].
  pub fn from_env() -> Self {
    Self::new(ResourceRoots::from_env())
  }
}

impl<S: ResourceSource> ResourceAccessor<S> {
  /// Create an accessor that owns `source`.
  pub fn new(source: S) -> Self {
    Self::from_shared(Arc::new(source))
  }

  /// Create an accessor over a source shared with other owners.
  pub fn from_shared(source: Arc<S>) -> Self {
    Self { source }
  }

  /// Source that identifiers are resolved against.
  pub fn source(&self) -> &S {
    &self.source
  }

  /// Resolve `identifier` to its URL, or `None` when it is not bundled.
  pub fn resolve_to_url(&self, identifier: &str) -> Option<Url> {
    let url = self.source.locate(&ensure_leading_separator(identifier));
    if url.is_none() {
      debug!(identifier, "resource did not resolve");
    }
    url
  }

  /// Open `identifier` as a byte stream positioned at its start.
  ///
  /// Absence is a valid outcome here and yields `None`.
  pub fn resolve_to_stream(&self, identifier: &str) -> Option<Box<dyn Read + '_>> {
    self.source.open(&ensure_leading_separator(identifier))
  }

  /// [`ResourceAccessor::resolve_to_stream`] for an identifier held as a native path.
  pub fn resolve_path_to_stream(&self, path: &Path) -> Option<Box<dyn Read + '_>> {
    self.resolve_to_stream(&from_native_path(path))
  }

  /// Read the whole of `identifier` as UTF-8.
  pub fn resolve_to_string(&self, identifier: &str) -> Result<String> {
    let mut stream = self
      .resolve_to_stream(identifier)
      .ok_or_else(|| ResourceError::not_found(identifier))?;
    read_utf8(&mut stream, identifier)
  }

  /// Native filesystem path of `identifier`.
  pub fn resolve_to_native_path(&self, identifier: &str) -> Result<PathBuf> {
    let url = self
      .resolve_to_url(identifier)
      .ok_or_else(|| ResourceError::not_found(identifier))?;
    url_to_native_path(&url)
  }

  /// Open the file behind `identifier` for reading.
  pub fn resolve_to_file(&self, identifier: &str) -> Result<File> {
    let path = self.resolve_to_native_path(identifier)?;
    File::open(&path).map_err(|err| ResourceError::io(identifier, err))
  }

  /// Resolve `identifier` into a [`ResourcePath`] sharing this accessor's source.
  pub fn path(&self, identifier: impl Into<String>) -> Result<ResourcePath<S>> {
    ResourcePath::try_with(self.clone(), identifier)
  }
}

/// Convert a resolved URL into a native path.
///
/// Goes through the URL's structured file-path conversion so percent-escapes and
/// platform separators come out right, rather than slicing the URL text.
pub(crate) fn url_to_native_path(url: &Url) -> Result<PathBuf> {
  url
    .to_file_path()
    .map_err(|()| ResourceError::NotFileBacked { url: url.clone() })
}

pub(crate) fn read_utf8(stream: &mut dyn Read, identifier: &str) -> Result<String> {
  let mut contents = String::new();
  stream
    .read_to_string(&mut contents)
    .map_err(|err| ResourceError::io(identifier, err))?;
  Ok(contents)
}
