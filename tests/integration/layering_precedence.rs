//! Overlay ordering: defaults < site overrides < caller properties.

use super::test_utils::{with_conf_dirs, write_resource};
use trawl_conf::factory;
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_site_overrides_defaults() {
    let host = TempDir::new().unwrap();
    write_resource(
        host.path(),
        "trawl-default",
        "agent = \"Trawl\"\nthreads = 10\n",
    );
    write_resource(host.path(), "trawl-site", "agent = \"SiteBot\"\n");

    with_conf_dirs(&[host.path()], || {
        let store = factory::create().unwrap();

        assert_eq!(store.get("agent"), Some("SiteBot"));
        assert_eq!(store.get("threads"), Some("10"));
    });
}

#[test]
fn test_properties_override_site_and_defaults() {
    let host = TempDir::new().unwrap();
    write_resource(host.path(), "trawl-default", "agent = \"Trawl\"\n");
    write_resource(host.path(), "trawl-site", "agent = \"SiteBot\"\n");

    let mut props = HashMap::new();
    props.insert("agent".to_string(), "CallerBot".to_string());

    with_conf_dirs(&[host.path()], || {
        let store = factory::create_from_properties(true, &props).unwrap();
        assert_eq!(store.get("agent"), Some("CallerBot"));
    });
}

#[test]
fn test_missing_site_resource_degrades_to_defaults() {
    let host = TempDir::new().unwrap();
    write_resource(
        host.path(),
        "trawl-default",
        "agent = \"Trawl\"\nthreads = 10\n",
    );

    with_conf_dirs(&[host.path()], || {
        let store = factory::create().unwrap();

        assert_eq!(store.get("agent"), Some("Trawl"));
        assert_eq!(store.get("threads"), Some("10"));
    });
}
