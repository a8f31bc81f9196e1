//! Pure path helpers shared by the resolver and the filter
//!
//! Filter entries and query paths are normalized identically so that
//! `./a/b/` and `a/b` compare equal. Matching is on whole path
//! segments and directional: the entry must be an ancestor (or the
//! exact path) of the candidate, never the reverse.

/// Strip a leading `./` and one trailing `/`.
pub fn normalize(path: &str) -> &str {
    let path = path.strip_prefix("./").unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Whether `entry` matches `candidate` at a segment boundary.
///
/// True when the candidate equals the entry or lies underneath it
/// (`path/to` matches `path/to/dir1` but not `path/tooo/dir1`). An
/// entry deeper than the candidate does not match.
pub fn matches(entry: &str, candidate: &str) -> bool {
    match candidate.strip_prefix(entry) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
