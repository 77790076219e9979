use std::sync::LazyLock;

use regex::Regex;

use crate::hostname::{fqdn, zone_name};

use super::{DiagnosticRow, DnsCheck, DomainSnapshot, Scope, SharedLookup, Status};

static DMARC_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v=DMARC1(\s*;.*)?$").expect("valid DMARC pattern")
});

/// The domain must publish a DMARC policy under `_dmarc`.
pub struct DmarcCheck {
    lookup: SharedLookup,
}

impl DmarcCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for DmarcCheck {
    fn name(&self) -> &'static str {
        "dmarc"
    }

    fn priority(&self) -> i32 {
        60
    }

    fn validate_domain(
        &self,
        _mailname: &str,
        _expected_all: &[String],
        domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        let name = fqdn("_dmarc", &zone_name(&domain.name));
        let records = self.lookup.lookup_txt(&name);
        let expected = vec!["v=DMARC1; p=...".to_string()];

        let row = match find_policy(&records) {
            Some(policy) => {
                let message = match policy_tag(&policy) {
                    Some(p) => format!("DMARC record found (p={p})"),
                    None => "DMARC record found".to_string(),
                };
                DiagnosticRow::new(
                    Scope::Domain,
                    name,
                    "TXT (DMARC)",
                    expected,
                    vec![policy],
                    Status::Ok,
                    message,
                )
            }
            None => DiagnosticRow::new(
                Scope::Domain,
                name,
                "TXT (DMARC)",
                expected,
                records,
                Status::Error,
                "DMARC record missing",
            ),
        };
        vec![row]
    }
}

pub(crate) fn find_policy(records: &[String]) -> Option<String> {
    records
        .iter()
        .map(|record| record.trim())
        .filter(|record| !record.is_empty())
        .find(|record| DMARC_RECORD.is_match(record))
        .map(str::to_string)
}

/// Value of the `p=` tag, lower-cased.
fn policy_tag(record: &str) -> Option<String> {
    record.split(';').find_map(|part| {
        let (key, value) = part.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("p") {
            Some(value.trim().to_ascii_lowercase()).filter(|value| !value.is_empty())
        } else {
            None
        }
    })
}
