//! Search-path widening.
//!
//! A fresh store only sees the host installation's own configuration
//! directories. Crawl jobs ship resources in a separate bundle attached to
//! the executing task, so the factory merges both sources into one path
//! before any resource is loaded.

use crate::store::{ConfigStore, ResolutionPath};

/// Concatenate two search paths: all of `primary` in order, then all of
/// `secondary` in order.
///
/// Nothing is dropped and duplicates are not collapsed; resource lookup
/// short-circuits on first match, so dedup would only shift shadowing
/// semantics without saving anything.
pub fn merged_search_path(
    primary: &ResolutionPath,
    secondary: &ResolutionPath,
) -> ResolutionPath {
    let mut entries = Vec::with_capacity(primary.len() + secondary.len());
    entries.extend(primary.entries().iter().cloned());
    entries.extend(secondary.entries().iter().cloned());
    ResolutionPath::from_entries(entries)
}

/// Bind `merged` as the store's search path, replacing whatever path the
/// store carried before. Installing again does not compound paths.
pub fn install(store: &mut ConfigStore, merged: ResolutionPath) {
    store.set_search_path(merged);
}
