#![forbid(unsafe_code)]
//! dnscheck_lib: DNS compliance checks for a mail host and its managed domains.
//!
//! The [`Validator`] runs a list of [`DnsCheck`]s (address, PTR, MX, SPF, DMARC, DKIM,
//! autodiscovery) over a [`DnsLookup`] and returns a [`CheckResultSet`] of
//! [`DiagnosticRow`]s. DNS failures never abort a run; they show up as rows.

/// `tracing::debug!` with feature `with-tracing`, nothing otherwise.
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        tracing::debug!($($arg)*);
        #[cfg(not(feature = "with-tracing"))]
        let _ = format_args!($($arg)*);
    }};
}

pub mod check;
pub mod host_ips;
pub mod hostname;
pub mod lookup;
pub mod validator;

pub use check::{
    AddressCheck, AutodiscoveryCheck, DiagnosticRow, DkimCheck, DmarcCheck, DnsCheck,
    DomainSnapshot, MxCheck, PtrCheck, Scope, SharedLookup, SpfCheck, Status, default_checks,
};
pub use host_ips::{
    ExpectedHostIps, HostIpError, HostIpOptions, PublicIpSource, extract_ips, parse_override,
    resolve_with_source,
};
pub use hostname::normalize_hostname;
pub use lookup::{DnsLookup, LookupError, SrvRecord, reverse_name};
pub use validator::{CheckResultSet, DomainRows, Validator};

#[cfg(feature = "with-ip-discovery")]
pub use host_ips::{HttpIpSource, resolve_expected_host_ips};
#[cfg(feature = "with-system-dns")]
pub use lookup::SystemLookup;
