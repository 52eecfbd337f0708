//! ost-fixtures — default test configuration for the system test harness.
//!
//! Plain functions with explicit parameters: datacenter and cluster names,
//! which hosts to add and reboot, storage endpoints. [`HarnessDefaults`]
//! bundles them for a given [`Config`] and host list.

pub mod defaults;
pub mod engine_object_names;
pub mod storage;

use ost_core::config::Config;
use serde::Serialize;

pub use storage::IpResolver;

/// Every default the suite consumes, resolved against a config and the
/// hosts of the current deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessDefaults {
    pub dc_name: String,
    pub cluster_name: String,
    pub hostnames_to_add: Vec<String>,
    pub hostnames_to_reboot: Vec<String>,
    pub deploy_hosted_engine: bool,
    pub ansible_vms_to_deploy: String,
    pub sd_iscsi_host_ip: String,
    pub sd_nfs_host_storage_name: String,
    pub sd_iscsi_ansible_host: String,
    pub management_network: String,
}

impl HarnessDefaults {
    pub fn new(config: &Config, hosts_hostnames: &[String], ansible_all: &str) -> Self {
        Self {
            dc_name: config.engine.dc_name.clone(),
            cluster_name: config.engine.cluster_name.clone(),
            hostnames_to_add: defaults::hostnames_to_add(hosts_hostnames),
            hostnames_to_reboot: defaults::first_n_hosts(hosts_hostnames, config.hosts.reboot_count),
            deploy_hosted_engine: config.hosts.deploy_hosted_engine,
            ansible_vms_to_deploy: defaults::ansible_vms_to_deploy(ansible_all).to_string(),
            sd_iscsi_host_ip: config.storage.sd_iscsi_host_ip.clone(),
            sd_nfs_host_storage_name: config.storage.sd_nfs_host_storage_name.clone(),
            sd_iscsi_ansible_host: config.storage.sd_iscsi_ansible_host.clone(),
            management_network: config.storage.management_network.clone(),
        }
    }

    /// Names of the storage settings still holding a placeholder.
    pub fn unset_storage(&self) -> Vec<&'static str> {
        let mut unset = Vec::new();
        for (name, value) in [
            ("sd_iscsi_host_ip", &self.sd_iscsi_host_ip),
            ("sd_nfs_host_storage_name", &self.sd_nfs_host_storage_name),
            ("sd_iscsi_ansible_host", &self.sd_iscsi_ansible_host),
        ] {
            if storage::is_placeholder(value) {
                unset.push(name);
            }
        }
        if !unset.is_empty() {
            tracing::debug!(?unset, "storage settings not overridden");
        }
        unset
    }
}

impl Default for HarnessDefaults {
    fn default() -> Self {
        Self {
            dc_name: defaults::ost_dc_name().to_string(),
            cluster_name: defaults::ost_cluster_name().to_string(),
            hostnames_to_add: Vec::new(),
            hostnames_to_reboot: Vec::new(),
            deploy_hosted_engine: defaults::deploy_hosted_engine(),
            ansible_vms_to_deploy: defaults::ansible_vms_to_deploy("all").to_string(),
            sd_iscsi_host_ip: storage::sd_iscsi_host_ip(),
            sd_nfs_host_storage_name: storage::sd_nfs_host_storage_name(),
            sd_iscsi_ansible_host: storage::sd_iscsi_ansible_host(),
            management_network: "management".to_string(),
        }
    }
}
