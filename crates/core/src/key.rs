//! Object key construction
//!
//! Maps a local relative path (and an optional key prefix) to a storage
//! object key. Backslash separators are rewritten to forward slashes so
//! that keys built on Windows match keys built elsewhere.

/// Build a storage object key from an optional prefix and a relative path.
///
/// An empty prefix yields the normalized relative path unchanged. Duplicate
/// slashes are not collapsed and keys are not URL-encoded; the SDK and the
/// service own those concerns.
pub fn build_key(prefix: &str, relative_path: &str) -> String {
    let joined = if prefix.is_empty() {
        relative_path.to_string()
    } else {
        format!("{prefix}/{relative_path}")
    };
    joined.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_prefix() {
        assert_eq!(build_key("", "file.txt"), "file.txt");
        assert_eq!(build_key("", "sub/file.txt"), "sub/file.txt");
    }

    #[test]
    fn test_with_prefix() {
        assert_eq!(build_key("up", "file.txt"), "up/file.txt");
        assert_eq!(build_key("up/loads", "sub/file.txt"), "up/loads/sub/file.txt");
    }

    #[test]
    fn test_backslash_normalization() {
        assert_eq!(build_key("", "sub\\file.txt"), "sub/file.txt");
        assert_eq!(build_key("up", "a\\b\\c.txt"), "up/a/b/c.txt");
        // Backslash and forward-slash inputs normalize to the same key
        assert_eq!(build_key("up", "a\\b.txt"), build_key("up", "a/b.txt"));
    }

    #[test]
    fn test_deterministic() {
        let first = build_key("pre", "a/b.txt");
        let second = build_key("pre", "a/b.txt");
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_slashes_preserved() {
        // No trimming: a prefix with a trailing slash produces a double slash
        assert_eq!(build_key("up/", "file.txt"), "up//file.txt");
    }
}
