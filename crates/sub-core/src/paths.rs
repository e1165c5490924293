//! Filesystem path joining
//!
//! Joins path segments without doubling separators. Used for building VCS
//! paths out of configured roots; these are server-side POSIX paths, so the
//! separator is always `/` regardless of host platform.

/// Join path segments with a single `/` between each.
///
/// A leading `/` on the first non-empty segment is preserved, interior and
/// trailing separators on the segments are trimmed, and empty segments are
/// skipped.
pub fn join_paths(segments: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(segments.len());
    let mut absolute = false;
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 && segment.starts_with('/') {
            absolute = true;
        }
        let trimmed = segment.trim_matches('/');
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_plain_segments() {
        assert_eq!(join_paths(&["a", "b", "c"]), "a/b/c");
    }

    #[test]
    fn test_preserves_leading_slash() {
        assert_eq!(join_paths(&["/var/local", "submit"]), "/var/local/submit");
    }

    #[test]
    fn test_trims_redundant_separators() {
        assert_eq!(join_paths(&["/var/local/", "/vcs/"]), "/var/local/vcs");
    }

    #[test]
    fn test_skips_empty_segments() {
        assert_eq!(join_paths(&["/root", "", "child"]), "/root/child");
        assert_eq!(join_paths(&[]), "");
    }

    #[test]
    fn test_root_only() {
        assert_eq!(join_paths(&["/"]), "/");
    }
}
