#[cfg(feature = "with-tracing")]
pub fn init(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let fallback = if verbose {
        "dnscheck_lib=debug,dnscheck_cli=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(not(feature = "with-tracing"))]
pub fn init(verbose: bool) {
    if verbose {
        eprintln!("--verbose needs the 'with-tracing' feature");
    }
}
