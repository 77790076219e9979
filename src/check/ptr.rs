use crate::host_ips::ExpectedHostIps;
use crate::hostname::normalize_hostname;

use super::{DiagnosticRow, DnsCheck, Scope, SharedLookup, Status};

/// Reverse DNS of every expected host IP must point back to the mail host.
pub struct PtrCheck {
    lookup: SharedLookup,
}

impl PtrCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for PtrCheck {
    fn name(&self) -> &'static str {
        "ptr"
    }

    fn priority(&self) -> i32 {
        90
    }

    fn validate_mail_host(
        &self,
        mailname: &str,
        _expected: &ExpectedHostIps,
        expected_all: &[String],
    ) -> Vec<DiagnosticRow> {
        let wanted = normalize_hostname(mailname);
        expected_all
            .iter()
            .map(|ip| {
                let targets: Vec<String> = self
                    .lookup
                    .lookup_ptr(ip)
                    .iter()
                    .map(|target| normalize_hostname(target))
                    .collect();
                let (status, message) = if targets.contains(&wanted) {
                    (Status::Ok, "PTR points to mail host".to_string())
                } else if targets.is_empty() {
                    (Status::Error, format!("No PTR record found for {ip}"))
                } else {
                    (Status::Error, "PTR does not point to mail host".to_string())
                };
                DiagnosticRow::new(
                    Scope::MailHost,
                    ip.as_str(),
                    "PTR",
                    vec![wanted.clone()],
                    targets,
                    status,
                    message,
                )
            })
            .collect()
    }
}
