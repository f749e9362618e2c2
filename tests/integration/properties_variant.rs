//! Tests for the properties-based `create_from_properties` entry point.

use super::test_utils::{with_conf_dirs, write_resource};
use trawl_conf::{factory, identity};
use std::collections::HashMap;
use tempfile::TempDir;

#[test]
fn test_without_resources_contains_exactly_properties_and_identity() {
    let host = TempDir::new().unwrap();
    write_resource(host.path(), "trawl-default", "agent = \"Trawl\"\n");

    let mut props = HashMap::new();
    props.insert("x".to_string(), "1".to_string());

    with_conf_dirs(&[host.path()], || {
        let store = factory::create_from_properties(false, &props).unwrap();

        assert_eq!(store.get("x"), Some("1"));
        assert!(identity::read(&store).is_some());
        assert_eq!(store.len(), 2);
        // No resource layer was applied even though one is deployed.
        assert_eq!(store.get("agent"), None);
    });
}

#[test]
fn test_with_resources_layers_before_properties() {
    let host = TempDir::new().unwrap();
    write_resource(
        host.path(),
        "trawl-default",
        "agent = \"Trawl\"\nthreads = 10\n",
    );

    let mut props = HashMap::new();
    props.insert("threads".to_string(), "50".to_string());

    with_conf_dirs(&[host.path()], || {
        let store = factory::create_from_properties(true, &props).unwrap();

        assert_eq!(store.get("agent"), Some("Trawl"));
        assert_eq!(store.get("threads"), Some("50"));
    });
}

#[test]
fn test_empty_properties_without_resources() {
    let host = TempDir::new().unwrap();

    with_conf_dirs(&[host.path()], || {
        let store = factory::create_from_properties(false, &HashMap::new()).unwrap();

        // Only the identity tag.
        assert_eq!(store.len(), 1);
        assert!(identity::read(&store).is_some());
    });
}

#[test]
fn test_identity_key_collision_is_not_guarded() {
    let mut props = HashMap::new();
    props.insert(identity::IDENTITY_KEY.to_string(), "forced".to_string());

    let host = TempDir::new().unwrap();
    with_conf_dirs(&[host.path()], || {
        let store = factory::create_from_properties(false, &props).unwrap();
        // Properties are applied last; the caller's value wins.
        assert_eq!(identity::read(&store), Some("forced"));
    });
}
