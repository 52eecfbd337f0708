//! Domain-specific assertion macros for ost-logs harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! host log or raw copy was wrong and what the directory actually held.

use std::collections::BTreeSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Host log assertions
// ---------------------------------------------------------------------------

/// Assert that `<logs_path>/<host>` exists with exactly `expected` content.
///
/// ```rust
/// assert_host_log!(logs_path, "h1", "A\nB\n");
/// ```
#[macro_export]
macro_rules! assert_host_log {
    ($logs_path:expr, $host:expr, $expected:expr) => {{
        let path = ::std::path::Path::new(&$logs_path).join($host);
        match ::std::fs::read_to_string(&path) {
            Ok(actual) => ::pretty_assertions::assert_eq!(
                actual,
                $expected,
                "host log {} has unexpected content",
                path.display()
            ),
            Err(err) => panic!(
                "assert_host_log! failed: cannot read {}: {}\n  present: {:?}",
                path.display(),
                err,
                $crate::common::dir_entries(::std::path::Path::new(&$logs_path))
            ),
        }
    }};
}

/// Assert that no log file exists for `host`.
#[macro_export]
macro_rules! assert_no_host_log {
    ($logs_path:expr, $host:expr) => {{
        let path = ::std::path::Path::new(&$logs_path).join($host);
        if path.exists() {
            panic!(
                "assert_no_host_log! failed: {} exists with content {:?}",
                path.display(),
                ::std::fs::read_to_string(&path).unwrap_or_default()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Raw copy assertions
// ---------------------------------------------------------------------------

/// Assert that `raw_dir` holds exactly one byte-identical copy of every
/// source file and nothing else.
pub fn assert_raw_copies(raw_dir: &Path, sources: &[std::path::PathBuf]) {
    let expected: BTreeSet<String> = sources
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    let actual = dir_entries(raw_dir);
    pretty_assertions::assert_eq!(actual, expected, "raw/ file names");

    for source in sources {
        let copy = raw_dir.join(source.file_name().unwrap());
        let original = std::fs::read(source).unwrap();
        let copied = std::fs::read(&copy).unwrap();
        assert!(
            original == copied,
            "raw copy {} differs from {}",
            copy.display(),
            source.display()
        );
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// File names directly under `dir` (files and directories), sorted.
pub fn dir_entries(dir: &Path) -> BTreeSet<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(_) => BTreeSet::new(),
    }
}

/// Host log files under `logs_path`, i.e. everything except `raw/`.
pub fn host_log_names(logs_path: &Path) -> BTreeSet<String> {
    let mut names = dir_entries(logs_path);
    names.remove("raw");
    names
}
