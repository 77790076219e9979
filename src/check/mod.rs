//! DNS checks run by the [`Validator`](crate::Validator).
//!
//! Each check implements [`DnsCheck`] and owns a handle on the lookup port. Checks
//! never fail: a missing answer simply turns into a `Warning` or `Error` row
//! according to that check's policy.

mod address;
mod autodiscovery;
mod dkim;
mod dmarc;
mod mx;
mod ptr;
mod spf;
mod types;

pub use address::AddressCheck;
pub use autodiscovery::AutodiscoveryCheck;
pub use dkim::DkimCheck;
pub use dmarc::DmarcCheck;
pub use mx::MxCheck;
pub use ptr::PtrCheck;
pub use spf::SpfCheck;
pub use types::{DiagnosticRow, DomainSnapshot, Scope, Status};

use std::sync::Arc;

use crate::host_ips::ExpectedHostIps;
use crate::lookup::DnsLookup;

/// Shared handle on the lookup port.
pub type SharedLookup = Arc<dyn DnsLookup>;

pub trait DnsCheck: Send + Sync {
    /// Stable identifier, e.g. `"mx"`.
    fn name(&self) -> &'static str;

    /// Presentation rank, higher first. The validator does not sort on it.
    fn priority(&self) -> i32;

    /// Assertions about the mail host. `mailname` is already normalised.
    fn validate_mail_host(
        &self,
        _mailname: &str,
        _expected: &ExpectedHostIps,
        _expected_all: &[String],
    ) -> Vec<DiagnosticRow> {
        Vec::new()
    }

    /// Assertions about one managed domain's zone.
    fn validate_domain(
        &self,
        _mailname: &str,
        _expected_all: &[String],
        _domain: &DomainSnapshot,
    ) -> Vec<DiagnosticRow> {
        Vec::new()
    }
}

/// Every built-in check, in registration (priority) order.
pub fn default_checks(lookup: SharedLookup) -> Vec<Box<dyn DnsCheck>> {
    vec![
        Box::new(AddressCheck::new(lookup.clone())),
        Box::new(PtrCheck::new(lookup.clone())),
        Box::new(MxCheck::new(lookup.clone())),
        Box::new(SpfCheck::new(lookup.clone())),
        Box::new(DmarcCheck::new(lookup.clone())),
        Box::new(DkimCheck::new(lookup.clone())),
        Box::new(AutodiscoveryCheck::new(lookup)),
    ]
}

pub(crate) fn intersects(actual: &[String], expected: &[String]) -> bool {
    actual.iter().any(|value| expected.contains(value))
}
