use regex::Regex;

fn remote_reference_patterns() -> &'static [Regex] {
  use std::sync::OnceLock;

  static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
  PATTERNS
    .get_or_init(|| {
      vec![
        Regex::new(r"(?i)^/*https?://").expect("invalid http(s) regex"),
        Regex::new(r"(?i)^/*data:").expect("invalid data URI regex"),
        Regex::new(r"(?i)^/*mailto:").expect("invalid mailto regex"),
        Regex::new(r"(?i)^/*jar:").expect("invalid jar URI regex"),
      ]
    })
    .as_slice()
}

/// Determine whether an identifier names something outside the bundled resources.
///
/// Remote URLs and archive URIs are never looked up on disk; they resolve to nothing.
pub fn is_remote_reference(identifier: &str) -> bool {
  remote_reference_patterns()
    .iter()
    .any(|pattern| pattern.is_match(identifier))
}
