use crate::hostname::{normalize_hostname, zone_name};

use super::{DiagnosticRow, DnsCheck, DomainSnapshot, Scope, SharedLookup, Status, intersects};

/// The domain's MX must reach the mail host, by name or by address.
pub struct MxCheck {
    lookup: SharedLookup,
}

impl MxCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for MxCheck {
    fn name(&self) -> &'static str {
        "mx"
    }

    fn priority(&self) -> i32 {
        80
    }

    fn validate_domain(
        &self,
        mailname: &str,
        expected_all: &[String],
        domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        let zone = zone_name(&domain.name);
        let wanted = normalize_hostname(mailname);
        let targets: Vec<String> = self
            .lookup
            .lookup_mx(&zone)
            .iter()
            .map(|target| normalize_hostname(target))
            .collect();

        let (status, message) = if targets.is_empty() {
            (Status::Error, "No MX records found".to_string())
        } else if targets.contains(&wanted) {
            (Status::Ok, "MX points to mail host".to_string())
        } else if let Some(target) = targets
            .iter()
            .find(|target| intersects(&self.lookup.lookup_addresses(target), expected_all))
        {
            (
                Status::Ok,
                format!("MX target {target} resolves to expected host IPs"),
            )
        } else {
            (Status::Error, "No MX record points to mail host".to_string())
        };

        vec![DiagnosticRow::new(
            Scope::Domain,
            zone,
            "MX",
            vec![wanted],
            targets,
            status,
            message,
        )]
    }
}
