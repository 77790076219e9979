use anyhow::{Context, Result, bail};
use dnscheck_lib::DomainSnapshot;

use crate::args::Cli;

/// Domains from `--domain` flags followed by `--domains-file` entries.
pub fn collect(cli: &Cli) -> Result<Vec<DomainSnapshot>> {
    let mut domains: Vec<DomainSnapshot> = cli
        .domains
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| DomainSnapshot::new(name, !cli.no_dkim, cli.dkim_selector.clone()))
        .collect();

    if let Some(path) = &cli.domains_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read domains file {}", path.display()))?;
        let parsed = parse_list(&content, &cli.dkim_selector, !cli.no_dkim)
            .with_context(|| format!("parse domains file {}", path.display()))?;
        domains.extend(parsed);
    }

    if domains.is_empty() {
        tracing_warn("no domain given, only the mail host is checked");
    }
    Ok(domains)
}

/// `name [selector|-]` per line; `-` disables DKIM, `#` starts a comment.
pub fn parse_list(
    content: &str,
    default_selector: &str,
    dkim_by_default: bool,
) -> Result<Vec<DomainSnapshot>> {
    let mut domains = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let domain = match fields.as_slice() {
            [name] => DomainSnapshot::new(*name, dkim_by_default, default_selector),
            [name, "-"] => DomainSnapshot::without_dkim(*name),
            [name, selector] => DomainSnapshot::new(*name, true, *selector),
            _ => bail!("line {}: expected `name [selector|-]`, got '{line}'", idx + 1),
        };
        domains.push(domain);
    }
    Ok(domains)
}

#[cfg(feature = "with-tracing")]
fn tracing_warn(message: &str) {
    tracing::warn!("{message}");
}

#[cfg(not(feature = "with-tracing"))]
fn tracing_warn(message: &str) {
    eprintln!("warning: {message}");
}
