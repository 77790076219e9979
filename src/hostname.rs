//! Hostname normalisation shared by every check.

/// Lower-cases `host` and strips trailing dots so that `Mail.Example.com.` and
/// `mail.example.com` compare equal.
pub fn normalize_hostname(host: &str) -> String {
    host.trim_end_matches('.').to_ascii_lowercase()
}

/// Normalised ASCII form of a managed domain, used to build query names.
///
/// Unicode names go through IDNA; anything IDNA rejects falls back to
/// [`normalize_hostname`] so the lookup still happens (and simply finds nothing).
pub fn zone_name(domain: &str) -> String {
    let trimmed = domain.trim();
    match idna::domain_to_ascii(trimmed) {
        Ok(ascii) if !ascii.is_empty() => normalize_hostname(&ascii),
        _ => normalize_hostname(trimmed),
    }
}

/// Prefix `domain` with `label`, e.g. `fqdn("_dmarc", "example.com")`.
pub fn fqdn(label: &str, domain: &str) -> String {
    let trimmed = label.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        domain.to_string()
    } else {
        format!("{}.{}", trimmed.to_ascii_lowercase(), domain)
    }
}
