//! Immutable wrapper around one resource identifier and its resolved location.

use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::accessor::{ResourceAccessor, read_utf8, url_to_native_path};
use crate::error::{ResourceError, Result};
use crate::identifier;
use crate::source::{ResourceRoots, ResourceSource};

/// A resource identifier whose URL was resolved once, at construction.
///
/// Construction fails when the identifier does not resolve, so every `ResourcePath`
/// points at something that existed when it was created. Later changes to the bundled
/// files are not tracked.
///
/// Equality, hashing, and display use the identifier and URL only.
pub struct ResourcePath<S = ResourceRoots> {
  identifier: String,
  url: Url,
  accessor: ResourceAccessor<S>,
}

impl ResourcePath<ResourceRoots> {
  /// Resolve `identifier` against [`ResourceRoots::from_env`].
  pub fn try_new(identifier: impl Into<String>) -> Result<Self> {
    Self::try_with(ResourceAccessor::from_env(), identifier)
  }
}

impl<S: ResourceSource> ResourcePath<S> {
  /// Resolve `identifier` through `accessor`, failing fast when it is not bundled.
  pub fn try_with(accessor: ResourceAccessor<S>, identifier: impl Into<String>) -> Result<Self> {
    let identifier = identifier.into();
    let url = accessor
      .resolve_to_url(&identifier)
      .ok_or_else(|| ResourceError::not_found(identifier.as_str()))?;

    Ok(Self {
      identifier,
      url,
      accessor,
    })
  }

  /// Identifier exactly as it was supplied.
  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  /// Location cached at construction.
  pub fn url(&self) -> &Url {
    &self.url
  }

  /// Accessor used to resolve this path and its siblings.
  pub fn accessor(&self) -> &ResourceAccessor<S> {
    &self.accessor
  }

  /// Native path of `relative` resolved against this resource's directory.
  ///
  /// The result is normalised lexically, with `..` dropped at the filesystem root, and
  /// is not checked for existence.
  pub fn resolve_sibling_path(&self, relative: impl AsRef<Path>) -> Result<PathBuf> {
    let path = self.as_path()?;
    let parent = path.parent().unwrap_or(&path);
    Ok(normalize_native(&parent.join(relative)))
  }

  /// Resolve `relative` in identifier space and wrap the result in a new `ResourcePath`.
  ///
  /// `..` is dropped at the resource root, and the sibling keeps this identifier's
  /// leading-separator form. Fails with [`ResourceError::NotFound`], naming the resolved
  /// sibling identifier, when nothing is bundled there.
  pub fn resolve_sibling_resource_path(&self, relative: &str) -> Result<Self> {
    let sibling = identifier::resolve_sibling(&self.identifier, relative);
    Self::try_with(self.accessor.clone(), sibling)
  }

  /// Name of the directory directly containing this resource.
  pub fn parent_directory_name(&self) -> Option<&str> {
    identifier::parent(&self.identifier).and_then(identifier::file_name)
  }

  /// Freshly opened stream over the resource, or `None` if it has since disappeared.
  pub fn as_stream(&self) -> Option<Box<dyn Read + '_>> {
    self.accessor.resolve_to_stream(&self.identifier)
  }

  /// Native filesystem path of the cached URL.
  pub fn as_path(&self) -> Result<PathBuf> {
    url_to_native_path(&self.url)
  }

  /// Open the file behind [`ResourcePath::as_path`].
  pub fn as_file(&self) -> Result<File> {
    let path = self.as_path()?;
    File::open(&path).map_err(|err| ResourceError::io(self.identifier.as_str(), err))
  }

  /// Read the whole resource as UTF-8.
  ///
  /// A resource removed after construction reports [`ResourceError::NotFound`].
  pub fn as_string(&self) -> Result<String> {
    let mut stream = self
      .as_stream()
      .ok_or_else(|| ResourceError::not_found(self.identifier.as_str()))?;
    read_utf8(&mut stream, &self.identifier)
  }

  /// Final segment of the cached URL's path, percent-decoded.
  pub fn file_name(&self) -> Option<String> {
    let segment = self
      .url
      .path_segments()?
      .rev()
      .find(|segment| !segment.is_empty())?;
    Some(percent_decode_str(segment).decode_utf8_lossy().into_owned())
  }
}

impl<S> Clone for ResourcePath<S> {
  fn clone(&self) -> Self {
    Self {
      identifier: self.identifier.clone(),
      url: self.url.clone(),
      accessor: self.accessor.clone(),
    }
  }
}

impl<S> PartialEq for ResourcePath<S> {
  fn eq(&self, other: &Self) -> bool {
    self.identifier == other.identifier && self.url == other.url
  }
}

impl<S> Eq for ResourcePath<S> {}

impl<S> Hash for ResourcePath<S> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.identifier.hash(state);
    self.url.hash(state);
  }
}

impl<S> fmt::Debug for ResourcePath<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ResourcePath")
      .field("identifier", &self.identifier)
      .field("url", &self.url.as_str())
      .finish()
  }
}

impl<S> fmt::Display for ResourcePath<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.identifier, self.url)
  }
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize_native(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match normalized.components().next_back() {
        Some(Component::Normal(_)) => {
          normalized.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => normalized.push(".."),
      },
      other => normalized.push(other.as_os_str()),
    }
  }
  normalized
}
