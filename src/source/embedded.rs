//! In-memory resources, typically compiled in with `include_bytes!`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use url::Url;

use super::ResourceSource;
use crate::identifier::{SEPARATOR, ensure_leading_separator, normalize};

/// URL scheme used for resources that only exist in memory.
pub const EMBEDDED_SCHEME: &str = "embedded";

/// Resources held in memory and keyed by normalised identifier.
///
/// ```
/// use bundled_resources::{EmbeddedResources, ResourceAccessor};
///
/// let resources = EmbeddedResources::new().with("/data/config.json", br#"{"a":1}"#);
/// let accessor = ResourceAccessor::new(resources);
/// assert_eq!(accessor.resolve_to_string("data/config.json").unwrap(), r#"{"a":1}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
  entries: BTreeMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
  /// Create an empty set of embedded resources.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style variant of [`EmbeddedResources::insert`].
  pub fn with(mut self, identifier: &str, contents: impl Into<Cow<'static, [u8]>>) -> Self {
    self.insert(identifier, contents);
    self
  }

  /// Register `contents` under `identifier`, replacing any previous entry.
  pub fn insert(&mut self, identifier: &str, contents: impl Into<Cow<'static, [u8]>>) {
    let key = normalize(identifier)
      .unwrap_or_else(|| ensure_leading_separator(identifier).into_owned());
    self.entries.insert(key, contents.into());
  }

  /// Number of registered resources.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no resources are registered.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn get(&self, identifier: &str) -> Option<&[u8]> {
    let key = normalize(identifier)?;
    self.entries.get(&key).map(|bytes| bytes.as_ref())
  }
}

impl ResourceSource for EmbeddedResources {
  fn locate(&self, identifier: &str) -> Option<Url> {
    self.get(identifier)?;
    let key = normalize(identifier)?;
    let mut url = Url::parse(&format!("{EMBEDDED_SCHEME}:///")).ok()?;
    url
      .path_segments_mut()
      .ok()?
      .clear()
      .extend(key.split(SEPARATOR).filter(|segment| !segment.is_empty()));
    Some(url)
  }

  fn open(&self, identifier: &str) -> Option<Box<dyn Read + '_>> {
    let bytes = self.get(identifier)?;
    Some(Box::new(Cursor::new(bytes)))
  }
}
