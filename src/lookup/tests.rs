use std::collections::HashMap;
use std::net::IpAddr;

use proptest::prelude::*;

use super::{DnsLookup, SrvRecord, dedup, reverse_name};

/// In-memory [`DnsLookup`] keyed by normalised name.
#[derive(Default)]
pub(crate) struct StubLookup {
    a: HashMap<String, Vec<String>>,
    aaaa: HashMap<String, Vec<String>>,
    mx: HashMap<String, Vec<String>>,
    txt: HashMap<String, Vec<String>>,
    ptr: HashMap<String, Vec<String>>,
    srv: HashMap<String, Vec<SrvRecord>>,
    cname: HashMap<String, Vec<String>>,
}

impl StubLookup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_a(mut self, host: &str, ips: &[&str]) -> Self {
        self.a.insert(key(host), owned(ips));
        self
    }

    pub(crate) fn with_aaaa(mut self, host: &str, ips: &[&str]) -> Self {
        self.aaaa.insert(key(host), owned(ips));
        self
    }

    pub(crate) fn with_mx(mut self, domain: &str, targets: &[&str]) -> Self {
        self.mx.insert(key(domain), owned(targets));
        self
    }

    pub(crate) fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt.insert(key(name), owned(records));
        self
    }

    pub(crate) fn with_ptr(mut self, ip: &str, targets: &[&str]) -> Self {
        let name = reverse_name(ip).unwrap_or_else(|| panic!("{ip} is not an address"));
        self.ptr.insert(name, owned(targets));
        self
    }

    pub(crate) fn with_srv(mut self, name: &str, records: Vec<SrvRecord>) -> Self {
        self.srv.insert(key(name), records);
        self
    }

    pub(crate) fn with_cname(mut self, name: &str, targets: &[&str]) -> Self {
        self.cname.insert(key(name), owned(targets));
        self
    }
}

impl DnsLookup for StubLookup {
    fn lookup_a(&self, host: &str) -> Vec<String> {
        get(&self.a, host)
    }

    fn lookup_aaaa(&self, host: &str) -> Vec<String> {
        get(&self.aaaa, host)
    }

    fn lookup_mx(&self, domain: &str) -> Vec<String> {
        get(&self.mx, domain)
    }

    fn lookup_txt(&self, name: &str) -> Vec<String> {
        get(&self.txt, name)
    }

    fn query_ptr(&self, reverse_name: &str) -> Vec<String> {
        get(&self.ptr, reverse_name)
    }

    fn lookup_srv(&self, name: &str) -> Vec<SrvRecord> {
        self.srv.get(&key(name)).cloned().unwrap_or_default()
    }

    fn lookup_cname(&self, name: &str) -> Vec<String> {
        get(&self.cname, name)
    }
}

fn key(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn get(map: &HashMap<String, Vec<String>>, name: &str) -> Vec<String> {
    map.get(&key(name)).cloned().unwrap_or_default()
}

fn parse_reverse_name(name: &str) -> Option<IpAddr> {
    if let Some(head) = name.strip_suffix(".in-addr.arpa") {
        let mut octets: Vec<&str> = head.split('.').collect();
        octets.reverse();
        return octets.join(".").parse().ok();
    }
    let head = name.strip_suffix(".ip6.arpa")?;
    let nibbles: Vec<&str> = head.split('.').rev().collect();
    if nibbles.len() != 32 {
        return None;
    }
    let groups: Vec<String> = nibbles.chunks(4).map(|chunk| chunk.concat()).collect();
    groups.join(":").parse().ok()
}

#[test]
fn reverse_name_ipv4() {
    insta::assert_snapshot!(reverse_name("192.0.2.10").unwrap(), @"10.2.0.192.in-addr.arpa");
}

#[test]
fn reverse_name_ipv6_is_nibble_reversed() {
    insta::assert_snapshot!(
        reverse_name("2001:db8::1").unwrap(),
        @"1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
    );
}

#[test]
fn reverse_name_rejects_garbage() {
    assert_eq!(reverse_name("not-an-ip"), None);
    assert_eq!(reverse_name("1.2.3"), None);
    assert_eq!(reverse_name(""), None);
}

#[test]
fn lookup_ptr_returns_empty_for_unparseable_ip() {
    let stub = StubLookup::new().with_ptr("192.0.2.1", &["mail.example.com."]);
    assert!(stub.lookup_ptr("mail.example.com").is_empty());
    assert_eq!(stub.lookup_ptr("192.0.2.1"), vec!["mail.example.com."]);
}

#[test]
fn lookup_addresses_merges_families_without_duplicates() {
    let stub = StubLookup::new()
        .with_a("mail.example.com", &["192.0.2.1", "192.0.2.1"])
        .with_aaaa("mail.example.com", &["2001:db8::1"]);
    assert_eq!(
        stub.lookup_addresses("mail.example.com"),
        vec!["192.0.2.1", "2001:db8::1"]
    );
}

#[test]
fn dedup_keeps_first_occurrence() {
    let out = dedup(vec!["b", "a", "b", "c", "a"]);
    assert_eq!(out, vec!["b", "a", "c"]);
}

proptest! {
    #[test]
    fn ipv4_reverse_name_round_trips(octets in any::<[u8; 4]>()) {
        let ip = IpAddr::from(octets);
        let name = reverse_name(&ip.to_string()).unwrap();
        prop_assert!(name.ends_with(".in-addr.arpa"));
        prop_assert_eq!(parse_reverse_name(&name), Some(ip));
    }

    #[test]
    fn ipv6_reverse_name_round_trips(segments in any::<[u16; 8]>()) {
        let ip = IpAddr::from(segments);
        let name = reverse_name(&ip.to_string()).unwrap();
        prop_assert!(name.ends_with(".ip6.arpa"));
        prop_assert_eq!(name.split('.').count(), 34);
        prop_assert_eq!(parse_reverse_name(&name), Some(ip));
    }
}
