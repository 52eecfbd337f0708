//! Configuration types for ost-logs.
//!
//! [`Config::load`] reads `~/.config/ost-logs/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//! [`Config::from_file`] layers an explicit file over the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[collector]
logs_dir = "ansible_logs"
raw_dir  = "raw"

[engine]
dc_name      = "test-dc"
cluster_name = "test-cluster"

[hosts]
deploy_hosted_engine = false
reboot_count         = 1

[storage]
sd_iscsi_host_ip         = "Please override sd_iscsi_host_ip"
sd_nfs_host_storage_name = "Please override sd_nfs_host_storage_name"
sd_iscsi_ansible_host    = "Please override sd_iscsi_ansible_host"
management_network       = "management"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/ost-logs/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub hosts: HostsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// `[collector]` section: output layout under the target directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectorConfig {
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    #[serde(default = "default_raw_dir")]
    pub raw_dir: String,
}

fn default_logs_dir() -> String { "ansible_logs".to_string() }
fn default_raw_dir() -> String { "raw".to_string() }

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            raw_dir: default_raw_dir(),
        }
    }
}

/// `[engine]` section: names of the objects the suite creates in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_dc_name")]
    pub dc_name: String,
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,
}

fn default_dc_name() -> String { "test-dc".to_string() }
fn default_cluster_name() -> String { "test-cluster".to_string() }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dc_name: default_dc_name(),
            cluster_name: default_cluster_name(),
        }
    }
}

/// `[hosts]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostsConfig {
    #[serde(default)]
    pub deploy_hosted_engine: bool,
    /// How many hosts (from the front of the host list) get rebooted.
    #[serde(default = "default_reboot_count")]
    pub reboot_count: usize,
}

fn default_reboot_count() -> usize { 1 }

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            deploy_hosted_engine: false,
            reboot_count: default_reboot_count(),
        }
    }
}

/// `[storage]` section. The `sd_*` values are placeholders that a concrete
/// suite is expected to override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_sd_iscsi_host_ip")]
    pub sd_iscsi_host_ip: String,
    #[serde(default = "default_sd_nfs_host_storage_name")]
    pub sd_nfs_host_storage_name: String,
    #[serde(default = "default_sd_iscsi_ansible_host")]
    pub sd_iscsi_ansible_host: String,
    #[serde(default = "default_management_network")]
    pub management_network: String,
}

fn default_sd_iscsi_host_ip() -> String { "Please override sd_iscsi_host_ip".to_string() }
fn default_sd_nfs_host_storage_name() -> String { "Please override sd_nfs_host_storage_name".to_string() }
fn default_sd_iscsi_ansible_host() -> String { "Please override sd_iscsi_ansible_host".to_string() }
fn default_management_network() -> String { "management".to_string() }

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sd_iscsi_host_ip: default_sd_iscsi_host_ip(),
            sd_nfs_host_storage_name: default_sd_nfs_host_storage_name(),
            sd_iscsi_ansible_host: default_sd_iscsi_ansible_host(),
            management_network: default_management_network(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ost-logs/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path)
    }

    /// Layer an explicit file over the built-in defaults. The file must exist.
    ///
    /// `.yaml`/`.yml` and `.json` files are read as such; anything else
    /// (`suite.conf`, no extension, …) is read as TOML.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file {} does not exist", path.display());
        }
        Self::layered(path)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(file_format(path))
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn file_format(path: &Path) -> config::FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => config::FileFormat::Yaml,
        Some("json") => config::FileFormat::Json,
        _ => config::FileFormat::Toml,
    }
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ost-logs")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
