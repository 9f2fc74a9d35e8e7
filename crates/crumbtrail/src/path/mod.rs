/// Path utilities for breadcrumb derivation
///
/// All functions are **pure**: given same input, always produce same output
/// with no side effects.

pub mod trail;
pub use trail::PathTrail;

/// Rebuilds a path in canonical form: a leading `/` before each segment,
/// with empty segments (leading, trailing, duplicate slashes) dropped.
///
/// A path with no segments normalizes to the empty string, not `/` — callers
/// iterating the result get zero prefixes rather than a phantom root entry.
///
/// # Examples
///
/// ```
/// use crumbtrail::path::normalize;
///
/// assert_eq!(normalize("/a/b"), "/a/b");
/// assert_eq!(normalize("a//b/"), "/a/b");
/// assert_eq!(normalize("///"), "");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Returns the final `/`-delimited segment of a path.
///
/// ```
/// use crumbtrail::path::last_segment;
///
/// assert_eq!(last_segment("/a/b"), "b");
/// assert_eq!(last_segment("/a"), "a");
/// ```
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Upper-cases the first character of a segment, leaving the rest untouched.
///
/// Unicode-aware: a character whose uppercase form is multi-char expands.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when the segment is non-empty and entirely ASCII digits.
pub fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
