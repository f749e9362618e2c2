//! Identity tagging for configuration instances.
//!
//! Structurally identical stores are indistinguishable by content, so the
//! factory stamps every store it builds with a random identifier. The key
//! is reserved: no shipped resource file defines it. A caller-supplied
//! property that collides with it silently overwrites the tag; that is
//! accepted, not guarded.

use crate::store::ConfigStore;
use uuid::Uuid;

/// Reserved key holding the identity tag of a factory-built store.
pub const IDENTITY_KEY: &str = "trawl.conf.uuid";

/// Stamp `store` with a fresh random identity.
///
/// Called exactly once per freshly constructed store. UUID generation is
/// safe to invoke from concurrent factory calls without coordination.
pub fn assign(store: &mut ConfigStore) {
    store.set(IDENTITY_KEY, Uuid::new_v4().to_string());
}

/// Identity previously stamped into `store`, or `None` for a store that
/// was constructed elsewhere. Absence is a normal outcome, not an error.
pub fn read(store: &ConfigStore) -> Option<&str> {
    store.get(IDENTITY_KEY)
}
