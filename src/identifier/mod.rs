//! Pure string helpers for resource identifiers.
//!
//! Identifiers are slash-delimited and absolute relative to the resource root. Nothing in
//! this module touches the filesystem, so normalisation and sibling resolution can be
//! tested without any bundled resources present.

mod normalize;
mod segments;

pub use normalize::{
    SEPARATOR, ensure_leading_separator, from_native_path, normalize, normalize_within_root,
};
pub use segments::{file_name, parent, resolve_sibling};
