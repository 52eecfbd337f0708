//! Event file discovery — where the collector's input paths come from.
//!
//! ansible-runner writes one JSON file per event under
//! `<private_dir>/artifacts/<ident>/job_events/`. [`PrivateDir`] enumerates
//! those; fixed lists of paths implement [`EventFiles`] directly so callers
//! and tests can inject whatever they like.

use crate::error::{CollectError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A provider of event data file paths. Order is not significant to the
/// collector.
pub trait EventFiles {
    fn event_data_files(&self) -> Result<Vec<PathBuf>>;
}

impl EventFiles for [PathBuf] {
    fn event_data_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.to_vec())
    }
}

impl EventFiles for Vec<PathBuf> {
    fn event_data_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.clone())
    }
}

/// An ansible-runner private data directory.
#[derive(Debug, Clone)]
pub struct PrivateDir {
    root: PathBuf,
}

impl PrivateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.root.join("artifacts")
    }
}

impl EventFiles for PrivateDir {
    /// Every `*.json` file in every `artifacts/*/job_events/` directory,
    /// sorted by path. A private dir with no `artifacts/` yields nothing.
    fn event_data_files(&self) -> Result<Vec<PathBuf>> {
        let artifacts = self.artifacts_dir();
        if !artifacts.is_dir() {
            tracing::debug!(path = %artifacts.display(), "no artifacts directory");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for run_dir in list_dir(&artifacts)? {
            let job_events = run_dir.join("job_events");
            if !job_events.is_dir() {
                continue;
            }
            files.extend(list_dir(&job_events)?.into_iter().filter(|p| is_json_file(p)));
        }

        files.sort();
        tracing::debug!(
            private_dir = %self.root.display(),
            count = files.len(),
            "discovered event data files"
        );
        Ok(files)
    }
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| CollectError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        paths.push(entry.map_err(read_dir_err)?.path());
    }
    Ok(paths)
}

fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
