//! Sources that map absolute resource identifiers to locations.
//!
//! A source offers exactly one required capability: turn an identifier into a URL, or
//! report that nothing is bundled under that name. Everything else the crate does is
//! layered on top of that primitive.

mod embedded;
mod filters;
mod roots;

use std::fs::File;
use std::io::Read;

use url::Url;

pub use embedded::{EMBEDDED_SCHEME, EmbeddedResources};
pub use filters::is_remote_reference;
pub use roots::{ROOTS_ENV_VAR, ResourceRoots};

/// Resolution backend for resource identifiers.
///
/// Identifiers handed to a source always start with `/`.
pub trait ResourceSource {
  /// Resolve `identifier` to its location, or `None` when nothing is bundled there.
  fn locate(&self, identifier: &str) -> Option<Url>;

  /// Open `identifier` for reading from the start.
  ///
  /// The default implementation opens the native file behind [`ResourceSource::locate`].
  fn open(&self, identifier: &str) -> Option<Box<dyn Read + '_>> {
    let url = self.locate(identifier)?;
    let path = url.to_file_path().ok()?;
    let file = File::open(path).ok()?;
    Some(Box::new(file))
  }
}
