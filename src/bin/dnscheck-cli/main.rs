mod args;
mod domains;
mod logging;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use dnscheck_lib::{SystemLookup, Validator, normalize_hostname, resolve_expected_host_ips};

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mail_host = normalize_hostname(cli.mail_host.trim());
    if mail_host.is_empty() {
        anyhow::bail!("--mail-host is empty");
    }
    let domains = domains::collect(&cli)?;

    // a bad override must stop us before any DNS query
    let expected = resolve_expected_host_ips(&cli.host_ip_options())
        .context("resolve expected host IPs")?;

    let lookup = SystemLookup::from_system_conf().context("init DNS resolver")?;
    let validator = Validator::with_default_checks(Arc::new(lookup));
    let result = validator.validate(&mail_host, &expected, &domains);

    output::write_report(&result, &mail_host, &expected, &cli)?;

    // codes de sortie : 0 OK/warnings, 2 au moins une erreur, 1 fatal
    if result.has_errors() {
        std::process::exit(2);
    }
    Ok(())
}
