#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod accessor;
pub mod config;
pub mod error;
pub mod identifier;
pub mod resource_path;
pub mod source;
#[cfg(test)]
pub(crate) mod test_support;

pub use accessor::ResourceAccessor;
pub use config::RootsConfig;
pub use error::{ConfigError, ResourceError, Result};
pub use resource_path::ResourcePath;
pub use source::{EmbeddedResources, ResourceRoots, ResourceSource};
