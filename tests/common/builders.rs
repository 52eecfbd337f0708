//! Test builders — ergonomic constructors for event files and event dirs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for ansible-runner event JSON.
///
/// # Example
///
/// ```rust
/// let event = EventBuilder::new("host-0")
///     .stdout("ok: [host-0]")
///     .created("2021-01-01T00:00:01.000000")
///     .field("event", "runner_on_ok")
///     .build();
/// ```
pub struct EventBuilder {
    host: Option<String>,
    stdout: Option<String>,
    created: Option<String>,
    extra: Map<String, Value>,
}

impl EventBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            stdout: None,
            created: None,
            extra: Map::new(),
        }
    }

    pub fn stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }

    pub fn created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn without_host(mut self) -> Self {
        self.host = None;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut event = self.extra;
        event.insert("uuid".into(), json!("00000000-0000-0000-0000-000000000000"));
        if let Some(stdout) = self.stdout {
            event.insert("stdout".into(), json!(stdout));
        }
        if let Some(created) = self.created {
            event.insert("created".into(), json!(created));
        }
        let mut event_data = Map::new();
        event_data.insert("task".into(), json!("test task"));
        if let Some(host) = self.host {
            event_data.insert("host".into(), json!(host));
        }
        event.insert("event_data".into(), Value::Object(event_data));
        Value::Object(event)
    }
}

/// An eligible event for `host`.
pub fn stdout_event(host: &str, created: &str, stdout: &str) -> Value {
    EventBuilder::new(host).stdout(stdout).created(created).build()
}

// ---------------------------------------------------------------------------
// EventDir
// ---------------------------------------------------------------------------

/// A temporary directory of event files, remembering the order they were
/// written in.
pub struct EventDir {
    dir: tempfile::TempDir,
    paths: Vec<PathBuf>,
}

impl EventDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create event dir"),
            paths: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialise `event` to `<dir>/<name>`.
    pub fn write(&mut self, name: &str, event: &Value) -> PathBuf {
        self.write_raw(name, &serde_json::to_string(event).expect("serialise event"))
    }

    /// Write `body` verbatim to `<dir>/<name>`.
    pub fn write_raw(&mut self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, body).expect("write event file");
        self.paths.push(path.clone());
        path
    }

    /// Write each event as `<index>-<uuid-ish>.json`, in order.
    pub fn write_all(&mut self, events: &[Value]) -> Vec<PathBuf> {
        events
            .iter()
            .enumerate()
            .map(|(i, event)| self.write(&format!("{}-event.json", i + 1), event))
            .collect()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
