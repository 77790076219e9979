use std::sync::LazyLock;

use regex::Regex;

use crate::hostname::zone_name;

use super::{DiagnosticRow, DnsCheck, DomainSnapshot, Scope, SharedLookup, Status};

static SPF_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v=spf1(\s+.+)?$").expect("valid SPF pattern")
});

/// The domain must publish an SPF policy.
pub struct SpfCheck {
    lookup: SharedLookup,
}

impl SpfCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for SpfCheck {
    fn name(&self) -> &'static str {
        "spf"
    }

    fn priority(&self) -> i32 {
        70
    }

    fn validate_domain(
        &self,
        _mailname: &str,
        _expected_all: &[String],
        domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        let zone = zone_name(&domain.name);
        let records = self.lookup.lookup_txt(&zone);

        let row = match find_policy(&records) {
            Some(policy) => {
                let message = match all_qualifier(&policy) {
                    Some(qualifier) => format!("SPF record found ({qualifier})"),
                    None => "SPF record found".to_string(),
                };
                DiagnosticRow::new(
                    Scope::Domain,
                    zone,
                    "TXT (SPF)",
                    vec!["v=spf1 ...".to_string()],
                    vec![policy],
                    Status::Ok,
                    message,
                )
            }
            None => DiagnosticRow::new(
                Scope::Domain,
                zone,
                "TXT (SPF)",
                vec!["v=spf1 ...".to_string()],
                records,
                Status::Error,
                "SPF record missing",
            ),
        };
        vec![row]
    }
}

/// First non-empty TXT value that is an SPF policy.
pub(crate) fn find_policy(records: &[String]) -> Option<String> {
    records
        .iter()
        .map(|record| record.trim())
        .filter(|record| !record.is_empty())
        .find(|record| SPF_RECORD.is_match(record))
        .map(str::to_string)
}

/// Terminal `all` mechanism with its qualifier, e.g. `-all`.
fn all_qualifier(policy: &str) -> Option<&'static str> {
    policy
        .split_whitespace()
        .find_map(|token| match token.to_ascii_lowercase().as_str() {
            "-all" => Some("-all"),
            "~all" => Some("~all"),
            "?all" => Some("?all"),
            "all" | "+all" => Some("+all"),
            _ => None,
        })
}
