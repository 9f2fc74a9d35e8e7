/// Lazy iterator over the cumulative prefixes of a canonical path
///
/// For path `/a/b/c`, yields: `/a` → `/a/b` → `/a/b/c` — one prefix per
/// segment, root to leaf, which is exactly the order a breadcrumb trail
/// displays them.
///
/// # Performance
///
/// - **Allocations**: Zero (yields borrowed slices of the input)
/// - **Complexity**: O(n) over the path length in total
///
/// # Input contract
///
/// The path must be canonical (as produced by [`super::normalize`]): empty,
/// or starting with `/` with no empty segments. An empty path yields nothing.
///
/// # Examples
///
/// ```
/// use crumbtrail::path::PathTrail;
///
/// let prefixes: Vec<&str> = PathTrail::new("/a/b/c").collect();
/// assert_eq!(prefixes, vec!["/a", "/a/b", "/a/b/c"]);
///
/// assert_eq!(PathTrail::new("").count(), 0);
/// ```
pub struct PathTrail<'a> {
    path: &'a str,
    /// Byte offset of the end of the last yielded prefix.
    pos: usize,
}

impl<'a> PathTrail<'a> {
    /// Creates an iterator over the cumulative prefixes of `path`.
    pub fn new(path: &'a str) -> Self {
        Self { path, pos: 0 }
    }
}

impl<'a> Iterator for PathTrail<'a> {
    type Item = &'a str;

    /// Returns the next cumulative prefix.
    ///
    /// Each call extends the previous prefix by one segment: skip the `/`
    /// at the current position, scan to the next `/` (or the end), and
    /// yield the slice from the start of the path up to that point.
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.path.len() {
            return None;
        }

        let rest = &self.path[self.pos + 1..];
        self.pos = match rest.find('/') {
            Some(offset) => self.pos + 1 + offset,
            None => self.path.len(),
        };

        Some(&self.path[..self.pos])
    }
}

// Make it clonable for reuse
impl<'a> Clone for PathTrail<'a> {
    fn clone(&self) -> Self {
        Self {
            path: self.path,
            pos: self.pos,
        }
    }
}
