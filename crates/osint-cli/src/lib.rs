//! # osint-cli
//!
//! Command-line front end for the OSINT lookup service.
//!
//! ## Features
//!
//! - **API server**: `osint serve` exposes WHOIS, DNS, reverse DNS and website
//!   analysis as JSON endpoints, optionally serving the frontend build
//! - **One-shot lookups**: `whois`, `dns`, `reverse`, `analyze` from the terminal
//! - **Multiple output formats**: pretty text, JSON, YAML
//! - **Config file**: TOML under the platform config directory

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
