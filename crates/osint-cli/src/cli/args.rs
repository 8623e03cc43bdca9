//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// WHOIS, DNS and website reconnaissance from the command line
///
/// Run `osint serve` to expose the same lookups as a JSON HTTP API.
#[derive(Parser, Debug)]
#[command(name = "osint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, env = "OSINT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the JSON HTTP API
    Serve(ServeArgs),

    /// Registration data for a domain
    Whois(WhoisArgs),

    /// Resolve records of one type for a domain
    Dns(DnsArgs),

    /// Hostname for an IP address
    Reverse(ReverseArgs),

    /// Scrape a page for emails and social links, then probe its domain
    Analyze(AnalyzeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address (overrides server.listen)
    #[arg(short, long)]
    pub listen: Option<SocketAddr>,

    /// Frontend build directory served at / (overrides server.static_dir)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WhoisArgs {
    /// Domain name to look up
    pub domain: String,
}

#[derive(Args, Debug)]
pub struct DnsArgs {
    /// Domain name to resolve
    pub domain: String,

    /// Record type (A, AAAA, MX, NS, TXT, CNAME, SOA, ...)
    #[arg(short = 't', long = "type", default_value = osint_core::DEFAULT_RECORD_TYPE)]
    pub record_type: String,
}

#[derive(Args, Debug)]
pub struct ReverseArgs {
    /// IPv4 or IPv6 address
    pub ip: String,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Page URL, including scheme
    pub url: String,

    /// Also write the report as JSON to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, recon.whois_timeout_secs)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
