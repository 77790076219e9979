use crate::hostname::{fqdn, zone_name};

use super::{DiagnosticRow, DnsCheck, DomainSnapshot, Scope, SharedLookup, Status};

/// The configured DKIM selector must publish a key. Skipped when DKIM is off.
pub struct DkimCheck {
    lookup: SharedLookup,
}

impl DkimCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for DkimCheck {
    fn name(&self) -> &'static str {
        "dkim"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn validate_domain(
        &self,
        _mailname: &str,
        _expected_all: &[String],
        domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        if !domain.dkim_enabled {
            return Vec::new();
        }

        let zone = zone_name(&domain.name);
        let selector = domain.dkim_selector.trim().trim_end_matches('.');
        let expected = vec!["v=DKIM1; k=rsa; p=...".to_string()];
        if selector.is_empty() {
            return vec![DiagnosticRow::new(
                Scope::Domain,
                fqdn("_domainkey", &zone),
                "TXT (DKIM)",
                expected,
                Vec::new(),
                Status::Error,
                "DKIM selector is not configured",
            )];
        }

        let name = fqdn(&format!("{selector}._domainkey"), &zone);
        let records: Vec<String> = self
            .lookup
            .lookup_txt(&name)
            .iter()
            .map(|record| record.trim().to_string())
            .filter(|record| !record.is_empty())
            .collect();

        let (status, message) = if records.is_empty() {
            (
                Status::Error,
                "DKIM selector record missing or empty".to_string(),
            )
        } else if records.iter().any(|record| testing_flag(record)) {
            (
                Status::Ok,
                "DKIM selector record found (testing mode t=y)".to_string(),
            )
        } else {
            (Status::Ok, "DKIM selector record found".to_string())
        };

        vec![DiagnosticRow::new(
            Scope::Domain,
            name,
            "TXT (DKIM)",
            expected,
            records,
            status,
            message,
        )]
    }
}

/// `t=y` among the record's flags.
fn testing_flag(record: &str) -> bool {
    record.split(';').any(|part| {
        let Some((key, value)) = part.split_once('=') else {
            return false;
        };
        key.trim().eq_ignore_ascii_case("t")
            && value
                .split(':')
                .any(|flag| flag.trim().eq_ignore_ascii_case("y"))
    })
}

#[cfg(test)]
mod tests {
    use super::testing_flag;

    #[test]
    fn detects_testing_flag() {
        assert!(testing_flag("v=DKIM1; p=MIIB; t=y"));
        assert!(testing_flag("v=DKIM1; t=s:y; p=MIIB"));
        assert!(!testing_flag("v=DKIM1; p=MIIB; t=s"));
        assert!(!testing_flag("v=DKIM1; p=MIIB"));
    }
}
