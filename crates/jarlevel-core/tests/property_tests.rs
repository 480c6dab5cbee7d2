//! Property-based tests for entry classification and version parsing.

#![allow(clippy::unwrap_used)]

use jarlevel_core::ClassEntry;
use jarlevel_core::SkipReason;
use jarlevel_core::ValidationConfig;
use jarlevel_core::parse_major_version;
use proptest::prelude::*;

proptest! {
    /// Anything under a default ignored prefix is skipped.
    #[test]
    fn prop_shaded_classes_ignored(
        prefix in prop::sample::select(vec!["dagger/spi/internal/shaded/", "dagger/grpc/shaded/"]),
        rest in "([a-z]+/){0,4}[A-Z][a-zA-Z0-9$]{0,10}"
    ) {
        let name = format!("{prefix}{rest}.class");
        let result = ClassEntry::classify(&name, false, &ValidationConfig::default());
        prop_assert_eq!(result, Err(SkipReason::Ignored));
    }

    /// Ordinary classes are validated and keep their internal name.
    #[test]
    fn prop_regular_classes_selected(
        package in "(com|org|io)/([a-z]+/){0,4}",
        class in "[A-Z][a-zA-Z0-9$]{0,10}"
    ) {
        let name = format!("{package}{class}.class");
        let entry = ClassEntry::classify(&name, false, &ValidationConfig::default()).unwrap();
        let expected = format!("{package}{class}");
        prop_assert_eq!(entry.internal_name(), expected.as_str());
    }

    /// Entries without the class suffix are never selected.
    #[test]
    fn prop_non_class_entries_skipped(name in "[a-zA-Z/]{1,30}\\.(java|kt|txt|MF|properties)") {
        let result = ClassEntry::classify(&name, false, &ValidationConfig::default());
        prop_assert_eq!(result, Err(SkipReason::NotAClass));
    }

    /// Directories are skipped whatever their name.
    #[test]
    fn prop_directories_skipped(name in "[a-z/]{0,20}(\\.class)?/") {
        let result = ClassEntry::classify(&name, true, &ValidationConfig::default());
        prop_assert_eq!(result, Err(SkipReason::Directory));
    }

    /// A single declaration surrounded by noise yields its digits.
    #[test]
    fn prop_single_declaration_parsed(
        before in "[a-z :\n]{0,40}",
        version in "[0-9]{1,3}",
        after in "[a-z :\n]{0,40}"
    ) {
        let output = format!("{before}\nmajor version: {version}\n{after}");
        prop_assume!(!after.contains("major version: "));
        prop_assert_eq!(parse_major_version(&output), Ok(version));
    }

    /// Two declarations are always rejected.
    #[test]
    fn prop_two_declarations_rejected(a in "[0-9]{1,3}", b in "[0-9]{1,3}") {
        let output = format!("major version: {a}\nminor version: 0\nmajor version: {b}\n");
        let matches = parse_major_version(&output).unwrap_err();
        prop_assert_eq!(matches, vec![a, b]);
    }
}
