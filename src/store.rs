//! Configuration Store
//!
//! Insertion-ordered key/value container produced by the factory, plus the
//! resolution path used to locate named resource files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the host installation's configuration
/// directories, PATH-style separated.
pub const CONF_DIR_ENV: &str = "TRAWL_CONF_DIR";

/// Ordered sequence of directories searched for named resource files.
///
/// Order is significant: the first directory containing a resource wins.
/// Duplicate entries are tolerated and preserved; the resolver
/// short-circuits on first match, so duplicates are harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPath {
    entries: Vec<PathBuf>,
}

impl ResolutionPath {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path over the given directories, in the given order.
    pub fn from_entries(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Append a directory at the end of the search order.
    pub fn push(&mut self, entry: PathBuf) {
        self.entries.push(entry);
    }

    /// Directories in search order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for ResolutionPath {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Mutable string-to-string configuration mapping.
///
/// Keys keep their first-insertion order; setting an existing key
/// overwrites its value in place. Provenance is not tracked beyond
/// overwrite-wins ordering. Each store also carries its own
/// [`ResolutionPath`] used when resource layers are applied to it.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    values: HashMap<String, String>,
    order: Vec<String>,
    search_path: ResolutionPath,
}

impl ConfigStore {
    /// Fresh, empty store bound to the host installation's default
    /// search path (`TRAWL_CONF_DIR`, falling back to `conf` and
    /// `/etc/trawl/conf`).
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            order: Vec::new(),
            search_path: host_search_path(),
        }
    }

    /// Fresh, empty store bound to an explicit search path.
    pub fn with_search_path(search_path: ResolutionPath) -> Self {
        Self {
            values: HashMap::new(),
            order: Vec::new(),
            search_path,
        }
    }

    /// Set `key` to `value`, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.values.insert(key, value.into());
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), self.values[key].as_str()))
    }

    /// Search path currently bound to this store.
    pub fn search_path(&self) -> &ResolutionPath {
        &self.search_path
    }

    /// Replace the search path wholesale. Installing twice does not
    /// compound: the previous path is discarded.
    pub fn set_search_path(&mut self, search_path: ResolutionPath) {
        self.search_path = search_path;
    }
}

/// Search path of the host installation itself, independent of any task
/// bundle.
pub fn host_search_path() -> ResolutionPath {
    match std::env::var(CONF_DIR_ENV) {
        Ok(raw) => std::env::split_paths(&raw).collect(),
        Err(_) => ResolutionPath::from_entries(vec![
            PathBuf::from("conf"),
            PathBuf::from("/etc/trawl/conf"),
        ]),
    }
}
