//! Storage endpoints.
//!
//! IP discovery is delegated to an [`IpResolver`]; the suite plugs in the
//! real one, tests plug in closures.

use std::net::IpAddr;

/// Resolves the addresses a host has on a named network, given the backend
/// the suite runs on and the ansible facts gathered from the storage host.
pub trait IpResolver<B: ?Sized, F: ?Sized> {
    fn get_ips(&self, backend: &B, facts: &F, network_name: &str) -> Vec<IpAddr>;
}

impl<B, F, Func> IpResolver<B, F> for Func
where
    B: ?Sized,
    F: ?Sized,
    Func: Fn(&B, &F, &str) -> Vec<IpAddr>,
{
    fn get_ips(&self, backend: &B, facts: &F, network_name: &str) -> Vec<IpAddr> {
        self(backend, facts, network_name)
    }
}

/// Bind a resolver to the storage host's facts, leaving only the network
/// name to pick.
pub fn storage_ips_for_network<'a, R, B, F>(
    resolver: &'a R,
    backend: &'a B,
    ansible_storage_facts: &'a F,
) -> impl Fn(&str) -> Vec<IpAddr> + 'a
where
    R: IpResolver<B, F> + ?Sized,
    B: ?Sized,
    F: ?Sized,
{
    move |network_name: &str| resolver.get_ips(backend, ansible_storage_facts, network_name)
}

pub fn storage_management_ips<L>(storage_ips_for_network: L, management_network_name: &str) -> Vec<IpAddr>
where
    L: Fn(&str) -> Vec<IpAddr>,
{
    storage_ips_for_network(management_network_name)
}

// Placeholders: a suite that uses these endpoints must override them.

/// Only one IP, since we connect to just one endpoint.
pub fn sd_iscsi_host_ip() -> String {
    placeholder("sd_iscsi_host_ip")
}

pub fn sd_nfs_host_storage_name() -> String {
    placeholder("sd_nfs_host_storage_name")
}

pub fn sd_iscsi_ansible_host() -> String {
    placeholder("sd_iscsi_ansible_host")
}

fn placeholder(name: &str) -> String {
    format!("Please override {name}")
}

/// Whether a value is still one of the placeholders above.
pub fn is_placeholder(value: &str) -> bool {
    value.starts_with("Please override ")
}
