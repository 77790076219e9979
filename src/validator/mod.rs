mod types;

pub use types::{CheckResultSet, DomainRows};

use crate::check::{DnsCheck, DomainSnapshot, SharedLookup, default_checks};
use crate::host_ips::ExpectedHostIps;
use crate::hostname::normalize_hostname;

/// Runs an ordered list of checks against the mail host and each managed domain.
///
/// Rows come back in registration order for the mail host, then domain by domain in
/// the order given, each domain again in registration order.
pub struct Validator {
    checks: Vec<Box<dyn DnsCheck>>,
}

impl Validator {
    pub fn new(checks: Vec<Box<dyn DnsCheck>>) -> Self {
        Self { checks }
    }

    /// Validator with every built-in check sharing `lookup`.
    pub fn with_default_checks(lookup: SharedLookup) -> Self {
        Self::new(default_checks(lookup))
    }

    pub fn validate(
        &self,
        mailname: &str,
        expected: &ExpectedHostIps,
        domains: &[DomainSnapshot],
    ) -> CheckResultSet {
        let mailname = normalize_hostname(mailname);
        let expected_all = expected.all();
        let mut result = CheckResultSet::new();

        for check in &self.checks {
            let rows = check.validate_mail_host(&mailname, expected, &expected_all);
            debug_event!("{} check produced {} mail host rows", check.name(), rows.len());
            result.mail_host.extend(rows);
        }

        for domain in domains {
            let mut rows = Vec::new();
            for check in &self.checks {
                let produced = check.validate_domain(&mailname, &expected_all, domain);
                debug_event!(
                    "{} check produced {} rows for {}",
                    check.name(),
                    produced.len(),
                    domain.name
                );
                rows.extend(produced);
            }
            result.insert_domain(domain.name.clone(), rows);
        }

        result
    }
}
