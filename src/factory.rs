//! Configuration factory.
//!
//! Entry points that materialize [`ConfigStore`] instances for crawl
//! jobs. Every store built here starts fresh, is stamped with a unique
//! identity, and is handed to the caller exclusively; the factory keeps
//! no reference to it.

use crate::error::ConfigError;
use crate::store::ConfigStore;
use crate::{context, identity, overlay, resolve};
use std::collections::HashMap;
use tracing::debug;

/// Build the standard configuration for a crawl job.
///
/// Widens the fresh store's search path with the directories visible to
/// the calling task (job bundles ship their resources separately from
/// the host installation), stamps an identity, then layers
/// `trawl-default` and `trawl-site`. This is the only entry point that
/// widens the search path.
pub fn create() -> Result<ConfigStore, ConfigError> {
    let mut store = ConfigStore::new();

    let task_path = context::current_search_path()?;
    let merged = resolve::merged_search_path(store.search_path(), &task_path);
    resolve::install(&mut store, merged);

    identity::assign(&mut store);
    overlay::apply_defaults(&mut store)?;
    overlay::apply_site_overrides(&mut store)?;

    debug!(
        uuid = identity::read(&store).unwrap_or_default(),
        search_path_entries = store.search_path().len(),
        keys = store.len(),
        "materialized job configuration"
    );
    Ok(store)
}

/// Build a configuration from caller-supplied properties.
///
/// The store keeps its host-default search path; no widening happens.
/// When `add_resources` is set, `trawl-default` and `trawl-site` are
/// layered first. `properties` is always applied last and wins per key.
pub fn create_from_properties(
    add_resources: bool,
    properties: &HashMap<String, String>,
) -> Result<ConfigStore, ConfigError> {
    let mut store = ConfigStore::new();

    identity::assign(&mut store);
    if add_resources {
        overlay::apply_defaults(&mut store)?;
        overlay::apply_site_overrides(&mut store)?;
    }
    overlay::apply_properties(&mut store, properties);

    debug!(
        uuid = identity::read(&store).unwrap_or_default(),
        add_resources,
        keys = store.len(),
        "materialized configuration from properties"
    );
    Ok(store)
}
