//! ost-logs — ansible log collection and harness defaults for oVirt system tests.
//!
//! This crate re-exports the workspace libraries so that integration tests
//! and benches can import everything from one place.
//!
//! # Layout
//!
//! ```text
//! ost-core      event records, collector, event file discovery, config
//! ost-fixtures  datacenter/cluster names, host lists, storage endpoints
//! ```

pub use ost_core::{
    collector, config, error, event_files, types, CollectError, EventData, EventFiles,
    EventRecord, HostLogGroup, HostLogs, LogsCollector, PrivateDir, SaveReport,
};
pub use ost_fixtures::{defaults, engine_object_names, storage, HarnessDefaults, IpResolver};
