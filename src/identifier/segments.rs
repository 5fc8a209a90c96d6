use super::normalize::{SEPARATOR, ensure_leading_separator, normalize_within_root};

/// Identifier of the directory containing `identifier`.
///
/// Top-level resources have the root (`/`) as parent; the root itself and bare names
/// without any separator have none.
pub fn parent(identifier: &str) -> Option<&str> {
    let trimmed = identifier.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR)? {
        0 => Some(&identifier[..1]),
        index => Some(&trimmed[..index]),
    }
}

/// Final segment of `identifier`, ignoring trailing separators.
pub fn file_name(identifier: &str) -> Option<&str> {
    let trimmed = identifier.trim_end_matches(SEPARATOR);
    let name = match trimmed.rfind(SEPARATOR) {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    };
    (!name.is_empty()).then_some(name)
}

/// Resolve `relative` against the parent of `identifier` and normalise the result.
///
/// The result keeps the caller's form: it starts with a separator only when
/// `identifier` does. A `relative` value that is itself absolute replaces the identifier
/// entirely. `..` segments that would climb above the resource root are dropped, and
/// the root serves as its own parent.
pub fn resolve_sibling(identifier: &str, relative: &str) -> String {
    if relative.starts_with(SEPARATOR) {
        return normalize_within_root(relative);
    }

    let absolute = ensure_leading_separator(identifier);
    let parent = parent(&absolute).unwrap_or(&absolute[..1]);
    let resolved = normalize_within_root(&format!("{parent}{SEPARATOR}{relative}"));

    if identifier.starts_with(SEPARATOR) {
        resolved
    } else {
        resolved.trim_start_matches(SEPARATOR).to_string()
    }
}
