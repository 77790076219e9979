use thiserror::Error;

/// Raised when the system DNS adapter cannot be built. Individual queries never fail.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
}

impl LookupError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }
}
