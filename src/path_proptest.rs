//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random directory trees and verify
//! that the relative link targets always lead back to where they should.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{normalize, relative_path};
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z_][a-z0-9_]{0,7}", 0..6)
    }

    fn absolute(parts: &[String]) -> PathBuf {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    }

    proptest! {
        /// Property: joining the relative path onto its origin lands on the target
        #[test]
        fn relative_path_round_trips(from in segments(), to in segments()) {
            let from_dir = absolute(&from);
            let target = absolute(&to);
            let relative = relative_path(&from_dir, &target).unwrap();
            prop_assert!(relative.is_relative());
            prop_assert_eq!(normalize(&from_dir.join(&relative)), normalize(&target));
        }

        /// Property: a link below the project root climbs once per extra segment
        #[test]
        fn relative_path_to_ancestor_is_only_parent_dirs(
            base in segments(),
            below in prop::collection::vec("[a-z_][a-z0-9_]{0,7}", 1..6),
        ) {
            let root = absolute(&base);
            let mut from_dir = root.clone();
            for part in &below {
                from_dir.push(part);
            }
            let relative = relative_path(&from_dir, &root).unwrap();
            let expected: PathBuf = std::iter::repeat("..").take(below.len()).collect();
            prop_assert_eq!(relative, expected);
        }

        /// Property: normalize is idempotent
        #[test]
        fn normalize_is_idempotent(parts in prop::collection::vec("(\\.|\\.\\.|[a-z]{1,4})", 0..8)) {
            let path: PathBuf = parts.iter().collect();
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
