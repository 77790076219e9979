//! Expected host IPs: the addresses the mail host is supposed to answer on.
//!
//! They come either from an operator override (`MAILSERVER_HOST_IPS`) or from a
//! public "what is my IP" service. A malformed override is a configuration error and
//! fails before any DNS query is made; an unreachable service is the only I/O failure
//! that reaches the caller.

mod error;
#[cfg(feature = "with-ip-discovery")]
mod http;
mod options;

pub use error::HostIpError;
#[cfg(feature = "with-ip-discovery")]
pub use http::HttpIpSource;
pub use options::{DEFAULT_LOOKUP_URL, HostIpOptions, LOOKUP_URL_ENV, OVERRIDE_ENV};

use std::net::IpAddr;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::lookup::dedup;

/// Immutable set of expected addresses, split per family, without duplicates.
///
/// Deserialization goes through [`ExpectedHostIps::new`], so families and duplicates
/// are sorted out again whatever the input says.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "with-serde",
    serde(rename_all = "camelCase", from = "HostIpLists")
)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedHostIps {
    ipv4: Vec<String>,
    ipv6: Vec<String>,
    is_override: bool,
}

impl ExpectedHostIps {
    /// Classifies `addrs` by family, dropping repeats.
    pub fn new<I>(addrs: I, is_override: bool) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let mut ipv4 = Vec::new();
        let mut ipv6 = Vec::new();
        for addr in addrs {
            match addr {
                IpAddr::V4(_) => ipv4.push(addr.to_string()),
                IpAddr::V6(_) => ipv6.push(addr.to_string()),
            }
        }
        Self {
            ipv4: dedup(ipv4),
            ipv6: dedup(ipv6),
            is_override,
        }
    }

    pub fn ipv4(&self) -> &[String] {
        &self.ipv4
    }

    pub fn ipv6(&self) -> &[String] {
        &self.ipv6
    }

    pub fn is_override(&self) -> bool {
        self.is_override
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    /// IPv4 then IPv6, first-seen order.
    pub fn all(&self) -> Vec<String> {
        dedup(self.ipv4.iter().chain(self.ipv6.iter()).cloned().collect())
    }
}

#[cfg(feature = "with-serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostIpLists {
    #[serde(default)]
    ipv4: Vec<IpAddr>,
    #[serde(default)]
    ipv6: Vec<IpAddr>,
    #[serde(default)]
    is_override: bool,
}

#[cfg(feature = "with-serde")]
impl From<HostIpLists> for ExpectedHostIps {
    fn from(lists: HostIpLists) -> Self {
        Self::new(lists.ipv4.into_iter().chain(lists.ipv6), lists.is_override)
    }
}

/// Source of the raw "what is my IP" answer.
pub trait PublicIpSource {
    fn fetch(&self) -> Result<String, HostIpError>;
}

/// Resolve the expected host IPs according to `options`, querying the configured HTTP
/// service when no override is set.
#[cfg(feature = "with-ip-discovery")]
pub fn resolve_expected_host_ips(options: &HostIpOptions) -> Result<ExpectedHostIps, HostIpError> {
    if let Some(raw) = options.override_value() {
        return parse_override(raw);
    }
    let source = HttpIpSource::new(options)?;
    resolve_with_source(options, &source)
}

/// Same as [`resolve_expected_host_ips`] with a caller supplied [`PublicIpSource`].
/// The source is not touched when an override is present.
pub fn resolve_with_source<S>(
    options: &HostIpOptions,
    source: &S,
) -> Result<ExpectedHostIps, HostIpError>
where
    S: PublicIpSource + ?Sized,
{
    if let Some(raw) = options.override_value() {
        debug_event!("using operator supplied host IPs");
        return parse_override(raw);
    }
    let body = source.fetch()?;
    let discovered = extract_ips(&body);
    debug_event!(
        "discovered {} IPv4 and {} IPv6 host addresses",
        discovered.ipv4().len(),
        discovered.ipv6().len()
    );
    Ok(discovered)
}

/// Parse a comma-separated override. Blank tokens are skipped; any other token that
/// is not an IPv4 or IPv6 address is rejected.
pub fn parse_override(raw: &str) -> Result<ExpectedHostIps, HostIpError> {
    let mut addrs = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let addr = token
            .parse::<IpAddr>()
            .map_err(|_| HostIpError::invalid_override(token))?;
        addrs.push(addr);
    }
    if addrs.is_empty() {
        return Err(HostIpError::EmptyOverride);
    }
    Ok(ExpectedHostIps::new(addrs, true))
}

/// Pull every address out of a free-form response body.
pub fn extract_ips(body: &str) -> ExpectedHostIps {
    let addrs = body
        .split(|c: char| !(c.is_ascii_hexdigit() || c == ':' || c == '.'))
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<IpAddr>().ok());
    ExpectedHostIps::new(addrs, false)
}
