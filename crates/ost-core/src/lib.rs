//! ost-core — ansible log collection for the system test harness.
//!
//! This crate holds the event record types, the log collector, event file
//! discovery and the shared configuration.
//!
//! # Flow
//!
//! ```text
//! EventFiles ──► paths ──► raw copy ──► ansible_logs/raw/
//!                  │
//!                  └──► parse + filter ──► HostLogs ──► sort ──► ansible_logs/<host>
//! ```
//!
//! Everything is synchronous and single-threaded.

pub mod collector;
pub mod config;
pub mod error;
pub mod event_files;
pub mod types;

pub use collector::{LogsCollector, SaveReport};
pub use error::{CollectError, Result};
pub use event_files::{EventFiles, PrivateDir};
pub use types::{EventData, EventRecord, HostLogGroup, HostLogs};
