use crate::hostname::{fqdn, normalize_hostname, zone_name};
use crate::lookup::SrvRecord;

use super::{DiagnosticRow, DnsCheck, DomainSnapshot, Scope, SharedLookup, Status, intersects};

/// Records mail clients use to configure themselves: autoconfig/autodiscover hosts,
/// IMAP/SMTP aliases, the `mailconf` TXT pointer and the service SRV records.
///
/// Every failure here is a `Warning`; clients still work when configured by hand.
pub struct AutodiscoveryCheck {
    lookup: SharedLookup,
}

impl AutodiscoveryCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }

    fn address_row(&self, host: String, expected_all: &[String]) -> DiagnosticRow {
        let actual = self.lookup.lookup_addresses(&host);
        let (status, message) = if intersects(&actual, expected_all) {
            (Status::Ok, "Resolves to expected host IPs")
        } else if actual.is_empty() {
            (Status::Warning, "A/AAAA record missing")
        } else {
            (Status::Warning, "A/AAAA record does not match expected host IPs")
        };
        DiagnosticRow::new(
            Scope::Domain,
            host,
            "A",
            expected_all.to_vec(),
            actual,
            status,
            message,
        )
    }

    fn alias_row(&self, host: String, expected_all: &[String]) -> DiagnosticRow {
        let mut actual = self.lookup.lookup_addresses(&host);
        let direct = intersects(&actual, expected_all);

        let mut via_cname = false;
        for target in self.lookup.lookup_cname(&host) {
            let target = normalize_hostname(&target);
            if !via_cname && intersects(&self.lookup.lookup_addresses(&target), expected_all) {
                via_cname = true;
            }
            actual.push(format!("CNAME {target}"));
        }

        let (status, message) = if direct {
            (Status::Ok, "Resolves to expected host IPs")
        } else if via_cname {
            (Status::Ok, "CNAME target resolves to expected host IPs")
        } else if actual.is_empty() {
            (Status::Warning, "A/AAAA or CNAME record missing")
        } else {
            (
                Status::Warning,
                "A/AAAA or CNAME record does not match expected host IPs",
            )
        };
        DiagnosticRow::new(
            Scope::Domain,
            host,
            "A/CNAME",
            expected_all.to_vec(),
            actual,
            status,
            message,
        )
    }

    fn mailconf_row(&self, zone: &str) -> DiagnosticRow {
        let wanted = format!("mailconf=https://autoconfig.{zone}/mail/config-v1.1.xml");
        let records = self.lookup.lookup_txt(zone);
        let (status, message) = if records.iter().any(|record| record.trim() == wanted) {
            (Status::Ok, "mailconf TXT record found")
        } else {
            (Status::Warning, "mailconf TXT record missing")
        };
        DiagnosticRow::new(
            Scope::Domain,
            zone,
            "TXT",
            vec![wanted],
            records,
            status,
            message,
        )
    }

    fn srv_row(&self, name: String, port: u16, target: &str) -> DiagnosticRow {
        let wanted = SrvRecord::new(0, 0, port, normalize_hostname(target));
        let records = self.lookup.lookup_srv(&name);
        let matches = records.iter().any(|record| {
            record.priority == 0
                && record.weight == 0
                && record.port == port
                && normalize_hostname(&record.target) == wanted.target
        });
        let (status, message) = if matches {
            (Status::Ok, "SRV record matches")
        } else if records.is_empty() {
            (Status::Warning, "SRV record missing")
        } else {
            (Status::Warning, "SRV record does not match")
        };
        DiagnosticRow::new(
            Scope::Domain,
            name,
            "SRV",
            vec![wanted.to_string()],
            records.iter().map(SrvRecord::to_string).collect(),
            status,
            message,
        )
    }
}

impl DnsCheck for AutodiscoveryCheck {
    fn name(&self) -> &'static str {
        "autodiscovery"
    }

    fn priority(&self) -> i32 {
        40
    }

    fn validate_domain(
        &self,
        mailname: &str,
        expected_all: &[String],
        domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        let zone = zone_name(&domain.name);
        let autodiscover = fqdn("autodiscover", &zone);

        vec![
            self.address_row(fqdn("autoconfig", &zone), expected_all),
            self.address_row(autodiscover.clone(), expected_all),
            self.alias_row(fqdn("imap", &zone), expected_all),
            self.alias_row(fqdn("smtp", &zone), expected_all),
            self.mailconf_row(&zone),
            self.srv_row(fqdn("_imaps._tcp", &zone), 993, mailname),
            self.srv_row(fqdn("_submission._tcp", &zone), 465, mailname),
            self.srv_row(fqdn("_autodiscover._tcp", &zone), 443, &autodiscover),
        ]
    }
}
