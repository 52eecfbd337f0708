//! Core types for ost-core.
//!
//! This module defines the data shared by the collector and its callers: the
//! [`EventRecord`] read from one ansible-runner event file, the
//! [`EventData`] it nests, and the [`HostLogs`] grouping built from eligible
//! records.

use serde::Deserialize;
use std::collections::HashMap;

/// One ansible-runner event, as written to `job_events/<uuid>.json`.
///
/// Every field is optional. The runner emits plenty of events that carry no
/// console output (playbook start, stats, verbose markers, …) and those must
/// deserialize just as well as the ones that do. Unknown keys are ignored and
/// a JSON `null` reads the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    /// Console output fragment produced by this event.
    #[serde(default)]
    pub stdout: Option<String>,
    /// Creation timestamp, used as the ordering key.
    ///
    /// ansible-runner writes ISO-8601 strings, which order correctly as text,
    /// so no parsing is done.
    #[serde(default)]
    pub created: Option<String>,
    /// Module/task details, including the originating host.
    #[serde(default)]
    pub event_data: Option<EventData>,
}

/// The `event_data` object nested in an [`EventRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub host: Option<String>,
}

impl EventRecord {
    /// Parse a record from the full contents of an event file.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.event_data.as_ref()?.host.as_deref()
    }

    /// Whether this record belongs in a host log.
    ///
    /// A record is eligible only with non-empty stdout (nothing to log
    /// otherwise), a creation time (it can't be ordered without one) and a
    /// host (logs are grouped by host).
    pub fn is_eligible(&self) -> bool {
        self.stdout().is_some_and(|s| !s.is_empty())
            && self.created().is_some()
            && self.host().is_some()
    }
}

/// Eligible records for one host, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLogGroup {
    pub host: String,
    pub events: Vec<EventRecord>,
}

impl HostLogGroup {
    /// Stable sort by `created` ascending. Records with equal timestamps keep
    /// their relative order.
    pub fn sort_by_created(&mut self) {
        self.events.sort_by(|a, b| a.created().cmp(&b.created()));
    }

    /// The host file body: each record's stdout followed by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(event.stdout().unwrap_or_default());
            out.push('\n');
        }
        out
    }
}

/// Eligible records grouped by host, groups in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostLogs {
    groups: Vec<HostLogGroup>,
    index: HashMap<String, usize>,
}

impl HostLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to its host's group. Returns `false` (and drops the
    /// record) if it is not eligible.
    pub fn push(&mut self, event: EventRecord) -> bool {
        if !event.is_eligible() {
            return false;
        }
        let Some(host) = event.host().map(str::to_owned) else {
            return false;
        };
        let slot = match self.index.get(&host) {
            Some(&slot) => slot,
            None => {
                self.groups.push(HostLogGroup {
                    host: host.clone(),
                    events: Vec::new(),
                });
                self.index.insert(host, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].events.push(event);
        true
    }

    pub fn get(&self, host: &str) -> Option<&HostLogGroup> {
        self.index.get(host).map(|&slot| &self.groups[slot])
    }

    pub fn groups(&self) -> &[HostLogGroup] {
        &self.groups
    }

    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.host.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sort every group by creation time.
    pub fn sort(&mut self) {
        for group in &mut self.groups {
            group.sort_by_created();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
