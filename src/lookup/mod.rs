//! DNS lookup port.
//!
//! [`DnsLookup`] is the only way checks talk to DNS. Its contract is total: a
//! failed query, NXDOMAIN or a timeout all come back as an empty list, because an
//! absent record is itself what the checks report on. The real implementation is
//! [`SystemLookup`] (feature `with-system-dns`); tests plug in a stub.

mod error;
mod reverse;
#[cfg(feature = "with-system-dns")]
mod system;

pub use error::LookupError;
pub use reverse::reverse_name;
#[cfg(feature = "with-system-dns")]
pub use system::SystemLookup;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// One SRV answer.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvRecord {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

impl SrvRecord {
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }
}

impl std::fmt::Display for SrvRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// Typed DNS queries. Every method returns a deduplicated list, empty when nothing
/// was found or the query failed.
pub trait DnsLookup: Send + Sync {
    fn lookup_a(&self, host: &str) -> Vec<String>;

    fn lookup_aaaa(&self, host: &str) -> Vec<String>;

    /// MX exchanges, most preferred first.
    fn lookup_mx(&self, domain: &str) -> Vec<String>;

    /// One string per TXT record, chunks already concatenated.
    fn lookup_txt(&self, name: &str) -> Vec<String>;

    /// PTR targets for an already built reverse-zone name.
    fn query_ptr(&self, reverse_name: &str) -> Vec<String>;

    fn lookup_srv(&self, name: &str) -> Vec<SrvRecord>;

    fn lookup_cname(&self, name: &str) -> Vec<String>;

    /// PTR targets for `ip`; empty when `ip` is not an address.
    fn lookup_ptr(&self, ip: &str) -> Vec<String> {
        match reverse_name(ip) {
            Some(name) => dedup(self.query_ptr(&name)),
            None => Vec::new(),
        }
    }

    /// A followed by AAAA answers for `host`.
    fn lookup_addresses(&self, host: &str) -> Vec<String> {
        let mut addresses = self.lookup_a(host);
        addresses.extend(self.lookup_aaaa(host));
        dedup(addresses)
    }
}

/// Drop repeated entries, keeping the first occurrence.
pub(crate) fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests;
