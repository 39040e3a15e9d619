use smbc_model::UNKNOWN;

/// Characters stripped from titles before they are used as file names.
pub const INVALID_FILENAME_CHARS: [char; 11] =
    ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>', '.'];

/// Remove every character in [`INVALID_FILENAME_CHARS`]. Nothing is
/// substituted, collapsed, truncated or case-folded.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect()
}

/// Base file name (no extension) for a comic with the given title.
///
/// Falls back to `fallback` only when the sanitized title is the
/// `"unknown"` placeholder.
pub fn base_filename(title: &str, fallback: &str) -> String {
    let sanitized = sanitize_filename(title);
    if sanitized == UNKNOWN {
        fallback.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_removes_blocked_chars() {
        assert_eq!(sanitize_filename("a/b\\c?d%e*f:g|h\"i<j>k.l"), "abcdefghijkl");
        assert_eq!(sanitize_filename("Today's Comic"), "Today's Comic");
        assert_eq!(sanitize_filename("..."), "");
    }

    #[test]
    fn test_sanitize_does_not_collapse_or_fold() {
        assert_eq!(sanitize_filename("A : B"), "A  B");
        assert_eq!(sanitize_filename("MiXeD Case"), "MiXeD Case");
    }

    #[test]
    fn test_base_filename_fallback() {
        assert_eq!(base_filename("unknown", "smbc_comic"), "smbc_comic");
        assert_eq!(base_filename("unk.nown", "smbc_comic"), "smbc_comic");
        assert_eq!(base_filename("Unknown", "smbc_comic"), "Unknown");
        assert_eq!(base_filename("Today's Comic", "smbc_comic"), "Today's Comic");
    }

    proptest! {
        #[test]
        fn prop_sanitize_output_has_no_blocked_chars(input in ".*") {
            let out = sanitize_filename(&input);
            prop_assert!(!out.chars().any(|c| INVALID_FILENAME_CHARS.contains(&c)));
        }

        #[test]
        fn prop_sanitize_only_removes_blocked_chars(input in ".*") {
            let out: Vec<char> = sanitize_filename(&input).chars().collect();
            let mut kept = 0;
            for c in input.chars() {
                if kept < out.len() && out[kept] == c {
                    kept += 1;
                } else {
                    prop_assert!(INVALID_FILENAME_CHARS.contains(&c), "dropped {c:?}");
                }
            }
            prop_assert_eq!(kept, out.len());
        }

        #[test]
        fn prop_sanitize_is_idempotent(input in "[a-z/.:? <>|*%\"\\\\]{0,40}") {
            let once = sanitize_filename(&input);
            prop_assert_eq!(sanitize_filename(&once), once.clone());
        }
    }
}
