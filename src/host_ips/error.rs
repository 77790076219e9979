use thiserror::Error;

/// Errors raised while establishing the expected host IPs.
#[derive(Debug, Error)]
pub enum HostIpError {
    #[error("host IP override contains an invalid address: '{token}'")]
    InvalidOverride { token: String },
    #[error("host IP override does not contain any address")]
    EmptyOverride,
    #[cfg(feature = "with-ip-discovery")]
    #[error("HTTP client initialization failed: {source}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },
    #[cfg(feature = "with-ip-discovery")]
    #[error("public IP lookup via {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("public IP lookup failed: {0}")]
    Source(String),
}

impl HostIpError {
    pub(crate) fn invalid_override(token: impl Into<String>) -> Self {
        Self::InvalidOverride {
            token: token.into(),
        }
    }

    #[cfg(feature = "with-ip-discovery")]
    pub(crate) fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// Configuration problems (as opposed to the lookup service being unreachable).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidOverride { .. } | Self::EmptyOverride)
    }
}
