use std::path::PathBuf;

use clap::Parser;
use dnscheck_lib::host_ips::{DEFAULT_LOOKUP_URL, HostIpOptions};

#[derive(Parser)]
#[command(
    name = "dnscheck-cli",
    about = "Check the DNS records a mail host and its domains need"
)]
pub struct Cli {
    /// mail host name (e.g. mail.example.com)
    #[arg(long, env = "MAILSERVER_HOSTNAME")]
    pub mail_host: String,

    /// expected host IPs, comma-separated; skips public IP discovery
    #[arg(long = "host-ips", env = "MAILSERVER_HOST_IPS")]
    pub host_ips: Option<String>,

    /// plain-text "what is my IP" endpoint
    #[arg(long, env = "MAILSERVER_IP_LOOKUP_URL", default_value = DEFAULT_LOOKUP_URL)]
    pub ip_lookup_url: String,

    /// timeout of the public IP lookup (ms)
    #[arg(long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// managed domain (repeatable)
    #[arg(long = "domain")]
    pub domains: Vec<String>,

    /// file with one domain per line: `name [selector|-]`
    #[arg(long)]
    pub domains_file: Option<PathBuf>,

    /// DKIM selector for domains that do not name one
    #[arg(long, default_value = "dkim")]
    pub dkim_selector: String,

    /// treat domains as not DKIM-signed unless the file says otherwise
    #[arg(long)]
    pub no_dkim: bool,

    /// format: human|json|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// write the report to this file instead of stdout, in --format
    #[arg(long)]
    pub out: Option<String>,

    /// debug logs on stderr (RUST_LOG wins when set)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn host_ip_options(&self) -> HostIpOptions {
        HostIpOptions {
            override_ips: self.host_ips.clone(),
            lookup_url: self.ip_lookup_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}
