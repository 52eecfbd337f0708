//! Session-wide defaults the suite falls back to when nothing overrides them.

use crate::engine_object_names;

pub fn ost_dc_name() -> &'static str {
    engine_object_names::TEST_DC_NAME
}

pub fn ost_cluster_name() -> &'static str {
    engine_object_names::TEST_CLUSTER_NAME
}

/// Every host gets added to the engine.
pub fn hostnames_to_add(hosts_hostnames: &[String]) -> Vec<String> {
    hosts_hostnames.to_vec()
}

/// Only the first host is rebooted.
pub fn hostnames_to_reboot(hosts_hostnames: &[String]) -> Vec<String> {
    first_n_hosts(hosts_hostnames, 1)
}

/// The first `count` hosts, or all of them if there are fewer.
pub fn first_n_hosts(hosts_hostnames: &[String], count: usize) -> Vec<String> {
    hosts_hostnames.iter().take(count).cloned().collect()
}

pub fn deploy_hosted_engine() -> bool {
    false
}

/// VMs are deployed on the whole `all` inventory group.
pub fn ansible_vms_to_deploy<T>(ansible_all: T) -> T {
    ansible_all
}
