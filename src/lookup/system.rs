use std::net::IpAddr;

use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
    lookup::Lookup,
    proto::rr::{RData, RecordType},
};

use super::{DnsLookup, LookupError, SrvRecord, dedup};

/// [`DnsLookup`] backed by the system resolver configuration (`/etc/resolv.conf`).
///
/// Queries are made once: the resolver is built with a single attempt per name server.
pub struct SystemLookup {
    resolver: Resolver,
}

impl SystemLookup {
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let (config, mut options) = trust_dns_resolver::system_conf::read_system_conf()
            .map_err(|err| LookupError::resolver_init(err.into()))?;
        options.attempts = 1;
        let resolver = Resolver::new(config, options).map_err(LookupError::resolver_init)?;
        Ok(Self::new(resolver))
    }

    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    fn query(&self, name: &str, record_type: RecordType) -> Option<Lookup> {
        let absolute = absolute_name(name);
        debug_event!("DNS {record_type} query for {absolute}");
        match self.resolver.lookup(absolute.as_str(), record_type) {
            Ok(lookup) => Some(lookup),
            Err(err) => {
                log_empty(&absolute, &err);
                None
            }
        }
    }

    fn addresses(&self, host: &str, record_type: RecordType) -> Vec<String> {
        let Some(lookup) = self.query(host, record_type) else {
            return Vec::new();
        };
        let want_v4 = record_type == RecordType::A;
        let addresses = lookup
            .iter()
            .filter_map(RData::ip_addr)
            .filter(|addr| matches!(addr, IpAddr::V4(_)) == want_v4)
            .map(|addr| addr.to_string())
            .collect();
        dedup(addresses)
    }

    fn names(&self, name: &str, record_type: RecordType) -> Vec<String> {
        let Some(lookup) = self.query(name, record_type) else {
            return Vec::new();
        };
        let names = lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::PTR(ptr) if record_type == RecordType::PTR => Some(ptr.0.to_utf8()),
                RData::CNAME(cname) if record_type == RecordType::CNAME => {
                    Some(cname.0.to_utf8())
                }
                _ => None,
            })
            .collect();
        dedup(names)
    }
}

impl DnsLookup for SystemLookup {
    fn lookup_a(&self, host: &str) -> Vec<String> {
        self.addresses(host, RecordType::A)
    }

    fn lookup_aaaa(&self, host: &str) -> Vec<String> {
        self.addresses(host, RecordType::AAAA)
    }

    fn lookup_mx(&self, domain: &str) -> Vec<String> {
        let absolute = absolute_name(domain);
        debug_event!("DNS MX query for {absolute}");
        let lookup = match self.resolver.mx_lookup(absolute.as_str()) {
            Ok(lookup) => lookup,
            Err(err) => {
                log_empty(&absolute, &err);
                return Vec::new();
            }
        };
        exchanges_by_preference(
            lookup
                .iter()
                .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
                .collect(),
        )
    }

    fn lookup_txt(&self, name: &str) -> Vec<String> {
        let absolute = absolute_name(name);
        debug_event!("DNS TXT query for {absolute}");
        let lookup = match self.resolver.txt_lookup(absolute.as_str()) {
            Ok(lookup) => lookup,
            Err(err) => {
                log_empty(&absolute, &err);
                return Vec::new();
            }
        };
        dedup(
            lookup
                .iter()
                .map(|txt| join_txt_chunks(txt.txt_data()))
                .collect(),
        )
    }

    fn query_ptr(&self, reverse_name: &str) -> Vec<String> {
        self.names(reverse_name, RecordType::PTR)
    }

    fn lookup_srv(&self, name: &str) -> Vec<SrvRecord> {
        let absolute = absolute_name(name);
        debug_event!("DNS SRV query for {absolute}");
        let lookup = match self.resolver.srv_lookup(absolute.as_str()) {
            Ok(lookup) => lookup,
            Err(err) => {
                log_empty(&absolute, &err);
                return Vec::new();
            }
        };
        let records = lookup
            .iter()
            .map(|srv| {
                SrvRecord::new(
                    srv.priority(),
                    srv.weight(),
                    srv.port(),
                    srv.target().to_utf8(),
                )
            })
            .collect();
        dedup(records)
    }

    fn lookup_cname(&self, name: &str) -> Vec<String> {
        self.names(name, RecordType::CNAME)
    }
}

/// Queries are always absolute so resolv.conf search domains never get appended.
fn absolute_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// Lowest preference first; ties by name, each exchange kept once.
fn exchanges_by_preference(mut records: Vec<(u16, String)>) -> Vec<String> {
    records.sort();
    dedup(records.into_iter().map(|(_, exchange)| exchange).collect())
}

/// One TXT record split in 255-byte strings reads as a single value.
fn join_txt_chunks(chunks: &[Box<[u8]>]) -> String {
    chunks
        .iter()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect()
}

fn log_empty(name: &str, err: &ResolveError) {
    if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
        debug_event!("no records for {name}");
    } else {
        debug_event!("lookup for {name} failed, treating as empty: {err}");
    }
}
