//! Property tests for the `serverless.yml` service rewrite.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use sprout::infrastructure::update_service_declaration;
use sprout::ProjectName;

fn yaml_line() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[a-z]{1,8}: [A-Za-z0-9 ._-]{0,16}").unwrap(),
        proptest::string::string_regex("  [a-z]{1,8}: [A-Za-z0-9]{0,8}").unwrap(),
        proptest::string::string_regex("# [ -~]{0,20}").unwrap(),
        Just(String::new()),
    ]
    .prop_filter("no service key", |line| !line.starts_with("service:"))
}

fn project_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9_$.-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only the first `service:` line changes; every other line,
    /// including later `service:` lines and CRLF endings, is preserved.
    #[test]
    fn property_only_first_service_line_changes(
        before in proptest::collection::vec(yaml_line(), 0..6),
        after in proptest::collection::vec(yaml_line(), 0..6),
        old_name in "[a-z]{1,12}",
        name in project_name(),
        crlf in any::<bool>(),
    ) {
        let eol = if crlf { "\r\n" } else { "\n" };
        let mut lines = before.clone();
        lines.push(format!("service: {}", old_name));
        lines.extend(after.iter().cloned());
        lines.push("service: second".to_string());
        let original = lines.join(eol) + eol;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("serverless.yml"), &original).unwrap();

        let project = ProjectName::new(&name).unwrap();
        let changed = update_service_declaration(dir.path(), &project).unwrap();
        prop_assert!(changed);

        let mut expected_lines = before.clone();
        expected_lines.push(format!("service: {}", name));
        expected_lines.extend(after.iter().cloned());
        expected_lines.push("service: second".to_string());
        let expected = expected_lines.join(eol) + eol;

        let rewritten = fs::read_to_string(dir.path().join("serverless.yml")).unwrap();
        prop_assert_eq!(rewritten, expected);
    }
}
