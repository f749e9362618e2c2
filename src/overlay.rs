//! Resource overlay.
//!
//! Layers the standard named resources and caller-supplied properties
//! onto a store. Precedence end to end: defaults, then site overrides,
//! then properties; last write per key wins, string replacement only.
//!
//! A resource named `n` is the file `n.toml` in the first search-path
//! directory that contains it. Files are flat tables of scalars; every
//! value is coerced to its string form on load.

use crate::error::ConfigError;
use crate::store::{ConfigStore, ResolutionPath};
use config::Source;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Base layer shipped with every Trawl installation.
pub const DEFAULTS_RESOURCE: &str = "trawl-default";

/// Per-deployment override layer. Optional.
pub const SITE_RESOURCE: &str = "trawl-site";

/// Layer the mandatory defaults resource into `store`.
pub fn apply_defaults(store: &mut ConfigStore) -> Result<(), ConfigError> {
    let file = locate(store.search_path(), DEFAULTS_RESOURCE).ok_or_else(|| {
        ConfigError::RequiredResourceMissing {
            name: DEFAULTS_RESOURCE.to_string(),
        }
    })?;
    apply_file(store, DEFAULTS_RESOURCE, file)
}

/// Layer the site-override resource into `store`, if one is deployed.
///
/// An absent site resource degrades to "defaults only"; a site file that
/// exists but cannot be loaded is still an error.
pub fn apply_site_overrides(store: &mut ConfigStore) -> Result<(), ConfigError> {
    match locate(store.search_path(), SITE_RESOURCE) {
        Some(file) => apply_file(store, SITE_RESOURCE, file),
        None => {
            debug!(
                resource = SITE_RESOURCE,
                "site overrides not found on search path, using defaults only"
            );
            Ok(())
        }
    }
}

/// Layer caller-supplied properties into `store`. Applied last, so a
/// property wins over any resource-provided value for the same key.
pub fn apply_properties(store: &mut ConfigStore, properties: &HashMap<String, String>) {
    for (key, value) in properties {
        store.set(key.clone(), value.clone());
    }
}

/// First directory on `path` containing `<name>.toml`.
fn locate(path: &ResolutionPath, name: &str) -> Option<PathBuf> {
    let file_name = format!("{}.toml", name);
    path.iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

fn apply_file(store: &mut ConfigStore, name: &str, file: PathBuf) -> Result<(), ConfigError> {
    debug!(resource = name, file = %file.display(), "applying resource layer");

    let loaded = config::Config::builder()
        .add_source(config::File::from(file))
        .build()
        .map_err(|source| ConfigError::ResourceLoad {
            name: name.to_string(),
            source,
        })?;

    let entries = loaded
        .collect()
        .map_err(|source| ConfigError::ResourceLoad {
            name: name.to_string(),
            source,
        })?;

    for (key, value) in entries {
        let value = value
            .into_string()
            .map_err(|source| ConfigError::ResourceLoad {
                name: name.to_string(),
                source,
            })?;
        store.set(key, value);
    }
    Ok(())
}
