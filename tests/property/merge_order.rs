//! Property-based tests for search-path merging.

use proptest::prelude::*;
use std::path::PathBuf;
use trawl_conf::resolve;
use trawl_conf::store::ResolutionPath;

fn path_from(components: &[String]) -> ResolutionPath {
    ResolutionPath::from_entries(components.iter().map(PathBuf::from).collect())
}

/// Merging never drops, reorders, or deduplicates entries.
#[test]
fn test_merge_is_exact_concatenation() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec("[a-z]{1,8}", 0..16),
                prop::collection::vec("[a-z]{1,8}", 0..16),
            ),
            |(primary, secondary)| {
                let primary_path = path_from(&primary);
                let secondary_path = path_from(&secondary);

                let merged =
                    resolve::merged_search_path(&primary_path, &secondary_path);

                assert_eq!(merged.len(), primary.len() + secondary.len());

                let expected: Vec<PathBuf> = primary
                    .iter()
                    .chain(secondary.iter())
                    .map(PathBuf::from)
                    .collect();
                assert_eq!(merged.entries(), expected.as_slice());

                Ok(())
            },
        )
        .unwrap();
}

/// Merging with an empty side is the identity on the other side.
#[test]
fn test_merge_with_empty_side_is_identity() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec("[a-z]{1,8}", 0..16),
            |components| {
                let path = path_from(&components);
                let empty = ResolutionPath::new();

                assert_eq!(resolve::merged_search_path(&path, &empty), path);
                assert_eq!(resolve::merged_search_path(&empty, &path), path);

                Ok(())
            },
        )
        .unwrap();
}
