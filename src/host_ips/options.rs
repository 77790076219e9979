use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

pub const OVERRIDE_ENV: &str = "MAILSERVER_HOST_IPS";
pub const LOOKUP_URL_ENV: &str = "MAILSERVER_IP_LOOKUP_URL";
pub const DEFAULT_LOOKUP_URL: &str = "https://api64.ipify.org";

/// Where the expected host IPs come from.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIpOptions {
    /// Comma-separated IPv4/IPv6 list declared by the operator. Wins over discovery.
    pub override_ips: Option<String>,
    /// "What is my IP" endpoint answering in plain text.
    pub lookup_url: String,
    pub timeout_ms: u64,
}

impl Default for HostIpOptions {
    fn default() -> Self {
        Self {
            override_ips: None,
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            timeout_ms: 5_000,
        }
    }
}

impl HostIpOptions {
    /// Defaults overlaid with `MAILSERVER_HOST_IPS` and `MAILSERVER_IP_LOOKUP_URL`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        options.override_ips = var(OVERRIDE_ENV);
        if let Some(url) = var(LOOKUP_URL_ENV).filter(|url| !url.trim().is_empty()) {
            options.lookup_url = url.trim().to_string();
        }
        options
    }

    pub fn with_override(mut self, ips: impl Into<String>) -> Self {
        self.override_ips = Some(ips.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The override, unless it is missing or blank.
    pub fn override_value(&self) -> Option<&str> {
        self.override_ips
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }
}
