//! Collector — saves the ansible logs of every ansible-runner execution.
//!
//! Given a target directory and the event data files of a run, the collector
//! produces:
//!
//! ```text
//! <target>/ansible_logs/raw/<event file name>   byte-for-byte copy, one per input
//! <target>/ansible_logs/<host>                  merged stdout of that host, by `created`
//! ```
//!
//! Every I/O or JSON error aborts the whole call. Events that carry nothing
//! loggable are dropped silently; the [`SaveReport`] counts them.

use crate::config::CollectorConfig;
use crate::error::{CollectError, Result};
use crate::event_files::EventFiles;
use crate::types::{EventRecord, HostLogs};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Outcome of a successful [`LogsCollector::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Directory the host logs were written to.
    pub logs_path: PathBuf,
    /// Number of event files copied into `raw/`.
    pub raw_copied: usize,
    /// Number of event files parsed.
    pub events_parsed: usize,
    /// Parsed events that had no stdout, timestamp or host.
    pub events_dropped: usize,
    /// Hosts that got a log file, in order of first appearance.
    pub hosts: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LogsCollector {
    layout: CollectorConfig,
}

impl LogsCollector {
    /// A collector writing to `ansible_logs/` and `ansible_logs/raw/`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A collector writing to `<logs_dir>/` and `<logs_dir>/<raw_dir>/`.
    ///
    /// Both names must be a single path component so that output stays
    /// under the target directory and raw copies stay apart from host logs.
    pub fn with_layout(layout: CollectorConfig) -> Result<Self> {
        for (field, value) in [("logs_dir", &layout.logs_dir), ("raw_dir", &layout.raw_dir)] {
            if !is_single_component(value) {
                return Err(CollectError::UnsafeLayout {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(Self { layout })
    }

    pub fn logs_path(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(&self.layout.logs_dir)
    }

    pub fn raw_logs_path(&self, target_dir: &Path) -> PathBuf {
        self.logs_path(target_dir).join(&self.layout.raw_dir)
    }

    /// Enumerate `source` once and collect from the resulting paths.
    pub fn save_from<E>(&self, target_dir: &Path, source: &E) -> Result<SaveReport>
    where
        E: EventFiles + ?Sized,
    {
        let event_files = source.event_data_files()?;
        self.save(target_dir, &event_files)
    }

    /// Copy every event file into `raw/` and write one stdout log per host.
    pub fn save(&self, target_dir: &Path, event_files: &[PathBuf]) -> Result<SaveReport> {
        let logs_path = self.logs_path(target_dir);
        let raw_logs_path = self.raw_logs_path(target_dir);
        fs::create_dir_all(&raw_logs_path).map_err(|source| CollectError::CreateDir {
            path: raw_logs_path.clone(),
            source,
        })?;

        let raw_copied = save_raw_events(event_files, &raw_logs_path)?;

        let loaded = load_events(event_files)?;
        let hosts: Vec<String> = loaded.logs.hosts().map(str::to_owned).collect();
        save_events_stdouts(loaded.logs, &logs_path)?;

        let report = SaveReport {
            logs_path,
            raw_copied,
            events_parsed: loaded.parsed,
            events_dropped: loaded.dropped,
            hosts,
        };
        tracing::info!(
            logs_path = %report.logs_path.display(),
            raw = report.raw_copied,
            parsed = report.events_parsed,
            dropped = report.events_dropped,
            hosts = report.hosts.len(),
            "saved ansible logs"
        );
        Ok(report)
    }
}

/// Eligible events grouped by host, plus how many files were read and how
/// many records were discarded.
#[derive(Debug, Clone, Default)]
pub struct LoadedEvents {
    pub logs: HostLogs,
    pub parsed: usize,
    pub dropped: usize,
}

/// Copy each event file into `raw_dir` under its own file name.
pub fn save_raw_events(event_files: &[PathBuf], raw_dir: &Path) -> Result<usize> {
    for event_file in event_files {
        let name = event_file
            .file_name()
            .ok_or_else(|| CollectError::NoFileName(event_file.clone()))?;
        let dest = raw_dir.join(name);
        tracing::trace!(from = %event_file.display(), to = %dest.display(), "copy raw event");
        fs::copy(event_file, &dest).map_err(|source| CollectError::Copy {
            from: event_file.clone(),
            to: dest.clone(),
            source,
        })?;
    }
    Ok(event_files.len())
}

/// Parse every event file and group the eligible records by host.
///
/// The first malformed file aborts the load.
pub fn load_events(event_files: &[PathBuf]) -> Result<LoadedEvents> {
    let mut loaded = LoadedEvents::default();

    for path in event_files {
        let bytes = fs::read(path).map_err(|source| CollectError::Read {
            path: path.clone(),
            source,
        })?;
        let event = EventRecord::from_slice(&bytes).map_err(|source| CollectError::Parse {
            path: path.clone(),
            source,
        })?;
        loaded.parsed += 1;

        if !loaded.logs.push(event) {
            loaded.dropped += 1;
            tracing::debug!(path = %path.display(), "dropping event without stdout, timestamp or host");
        }
    }

    Ok(loaded)
}

/// Sort each host's events by creation time and write `logs_dir/<host>`.
///
/// All host names are checked before anything is written.
pub fn save_events_stdouts(mut logs: HostLogs, logs_dir: &Path) -> Result<()> {
    for host in logs.hosts() {
        check_host_file_name(host)?;
    }

    logs.sort();
    for group in logs.groups() {
        let log_path = logs_dir.join(&group.host);
        tracing::debug!(host = %group.host, events = group.events.len(), "writing host log");
        fs::write(&log_path, group.render()).map_err(|source| CollectError::Write {
            path: log_path.clone(),
            source,
        })?;
    }
    Ok(())
}

fn check_host_file_name(host: &str) -> Result<()> {
    if is_single_component(host) {
        Ok(())
    } else {
        Err(CollectError::UnsafeHostName(host.to_string()))
    }
}

/// Exactly one normal path component: not empty, not `.`/`..`, not
/// absolute, no separators.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == OsStr::new(name)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
