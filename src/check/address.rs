use crate::host_ips::ExpectedHostIps;

use super::{DiagnosticRow, DnsCheck, Scope, SharedLookup, Status, intersects};

/// A and AAAA records of the mail host against the expected host IPs.
pub struct AddressCheck {
    lookup: SharedLookup,
}

impl AddressCheck {
    pub fn new(lookup: SharedLookup) -> Self {
        Self { lookup }
    }
}

impl DnsCheck for AddressCheck {
    fn name(&self) -> &'static str {
        "address"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn validate_mail_host(
        &self,
        mailname: &str,
        expected: &ExpectedHostIps,
        expected_all: &[String],
    ) -> Vec<DiagnosticRow> {
        let a = self.lookup.lookup_a(mailname);
        let aaaa = self.lookup.lookup_aaaa(mailname);
        let combined: Vec<String> = a.iter().chain(aaaa.iter()).cloned().collect();

        vec![
            family_row(mailname, "A", expected.ipv4(), a, &combined, expected_all),
            family_row(
                mailname,
                "AAAA",
                expected.ipv6(),
                aaaa,
                &combined,
                expected_all,
            ),
        ]
    }
}

fn family_row(
    mailname: &str,
    record_type: &str,
    expected_family: &[String],
    actual: Vec<String>,
    combined: &[String],
    expected_all: &[String],
) -> DiagnosticRow {
    let (status, message) = if expected_family.is_empty() {
        if combined.is_empty() {
            (
                Status::Warning,
                "No expected host IPs available for validation and no address records found"
                    .to_string(),
            )
        } else {
            (
                Status::Ok,
                format!("No expected host IPs available to validate the {record_type} record"),
            )
        }
    } else if intersects(&actual, expected_family) {
        (
            Status::Ok,
            format!("{record_type} record matches an expected host IP"),
        )
    } else if intersects(combined, expected_all) {
        (
            Status::Warning,
            format!("No matching {record_type} record, but other address records match"),
        )
    } else {
        (
            Status::Error,
            format!("No matching {record_type} record for expected host IPs"),
        )
    };

    DiagnosticRow::new(
        Scope::MailHost,
        mailname,
        record_type,
        expected_family.to_vec(),
        actual,
        status,
        message,
    )
}
