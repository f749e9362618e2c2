//! Trawl configuration materialization.
//!
//! Builds the runtime configuration for Trawl crawl jobs: each store is
//! stamped with a process-unique identity, its resource search path is
//! widened to cover both the host installation and the calling task's
//! job bundle, and the standard resource layers (`trawl-default`, then
//! `trawl-site` overrides, then caller properties) are applied in order.

pub mod context;
pub mod error;
pub mod factory;
pub mod identity;
pub mod logging;
pub mod overlay;
pub mod resolve;
pub mod store;
