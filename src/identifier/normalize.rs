use std::borrow::Cow;
use std::path::Path;

/// Separator used between identifier segments on every platform.
pub const SEPARATOR: char = '/';

/// Prefix a separator onto `identifier` unless it already starts with one.
///
/// Every lookup is treated as absolute relative to the resource root, never relative to
/// whichever module happens to be asking.
pub fn ensure_leading_separator(identifier: &str) -> Cow<'_, str> {
    if identifier.starts_with(SEPARATOR) {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("{SEPARATOR}{identifier}"))
    }
}

/// Convert a native path into identifier form.
///
/// Backslashes produced on Windows are rewritten so the result addresses the same
/// resource on every platform.
pub fn from_native_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Collapse `.`, `..`, and repeated separators into a canonical absolute identifier.
///
/// Returns `None` when a `..` segment would climb above the resource root.
pub fn normalize(identifier: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in identifier.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    Some(join_absolute(&segments))
}

/// Like [`normalize`], but `..` segments at the resource root are dropped.
pub fn normalize_within_root(identifier: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in identifier.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    join_absolute(&segments)
}

fn join_absolute(segments: &[&str]) -> String {
    format!("{SEPARATOR}{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_missing_separator() {
        assert_eq!(ensure_leading_separator("data/config.json"), "/data/config.json");
    }

    #[test]
    fn keeps_existing_separator_borrowed() {
        let result = ensure_leading_separator("/data/config.json");
        assert!(matches!(result, Cow::Borrowed("/data/config.json")));
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        let path = Path::new("data\\nested\\file.txt");
        assert_eq!(from_native_path(path), "data/nested/file.txt");
    }

    #[test]
    fn collapses_dot_segments() {
        assert_eq!(
            normalize("/data/./nested/../config.json").as_deref(),
            Some("/data/config.json")
        );
        assert_eq!(normalize("data//config.json").as_deref(), Some("/data/config.json"));
    }

    #[test]
    fn root_normalises_to_separator() {
        assert_eq!(normalize("").as_deref(), Some("/"));
        assert_eq!(normalize("/data/..").as_deref(), Some("/"));
    }

    #[test]
    fn drops_parent_segments_at_root() {
        assert_eq!(normalize_within_root("/../secret.txt"), "/secret.txt");
        assert_eq!(normalize_within_root("/data/../../a/./b.txt"), "/a/b.txt");
        assert_eq!(normalize_within_root(".."), "/");
    }

    #[test]
    fn rejects_climbing_above_root() {
        assert_eq!(normalize("/../secret.txt"), None);
        assert_eq!(normalize("/data/../../secret.txt"), None);
    }
}
