//! Property tests for path sanitization.

use std::path::{Component, Path, PathBuf};

use proptest::prelude::*;

use sprout::domain::value_objects::{sanitize_in, FORBIDDEN_CHARS};
use sprout::SproutError;

fn base() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\work\base")
    } else {
        PathBuf::from("/work/base")
    }
}

fn safe_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._ -]{0,11}").unwrap(),
        Just(".".to_string()),
        Just("..".to_string()),
    ]
}

fn safe_relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(safe_segment(), 1..=6)
        .prop_map(|segments| segments.join("/"))
        .prop_filter("must not be blank", |s| !s.trim().is_empty())
}

fn forbidden_char() -> impl Strategy<Value = char> {
    proptest::sample::select(FORBIDDEN_CHARS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitization never panics on arbitrary input.
    #[test]
    fn property_sanitize_never_panics(s in "(?s).{0,256}") {
        let _ = sanitize_in(&s, &base());
    }

    /// PROPERTY: any forbidden character anywhere is rejected.
    #[test]
    fn property_metacharacters_rejected(
        prefix in "[A-Za-z0-9/]{0,16}",
        bad in forbidden_char(),
        suffix in "[A-Za-z0-9/]{0,16}",
    ) {
        let input = format!("a{}{}{}", prefix, bad, suffix);
        let result = sanitize_in(&input, &base());
        let is_invalid_path = matches!(result, Err(SproutError::InvalidPath { .. }));
        prop_assert!(is_invalid_path);
    }

    /// PROPERTY: a leading hyphen (after trimming) is rejected.
    #[test]
    fn property_leading_hyphen_rejected(ws in "[ \t]{0,3}", rest in "[A-Za-z0-9-]{0,16}") {
        let input = format!("{}-{}", ws, rest);
        prop_assert!(sanitize_in(&input, &base()).is_err());
    }

    /// PROPERTY: accepted paths are absolute and contain no `.`/`..` segments.
    #[test]
    fn property_accepted_paths_are_normalized(input in safe_relative_path()) {
        let sanitized = sanitize_in(&input, &base()).unwrap();
        let path = sanitized.as_path();

        prop_assert!(path.is_absolute());
        prop_assert!(path
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
    }

    /// PROPERTY: sanitizing an already sanitized path is the identity.
    #[test]
    fn property_sanitize_is_idempotent(input in safe_relative_path()) {
        let once = sanitize_in(&input, &base()).unwrap();
        let again = sanitize_in(&once.to_string(), Path::new("/elsewhere")).unwrap();
        prop_assert_eq!(once, again);
    }

    /// PROPERTY: plain segments resolve to `base/segments`.
    #[test]
    fn property_plain_segments_join_base(
        segments in proptest::collection::vec("[A-Za-z0-9_]{1,8}", 1..=4)
    ) {
        let input = segments.join("/");
        let sanitized = sanitize_in(&input, &base()).unwrap();

        let mut expected = base();
        for segment in &segments {
            expected.push(segment);
        }
        prop_assert_eq!(sanitized.as_path(), expected.as_path());
    }
}
