//! Command implementations.

pub mod analyze;
pub mod config;
pub mod dns;
pub mod reverse;
pub mod serve;
pub mod whois;

use anyhow::Result;
use colored::Colorize;
use osint_recon::NetworkLookup;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration
    pub config: Config,

    /// Where the configuration was loaded from
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Lookup client built from the recon section of the config.
    pub fn lookup(&self) -> Result<NetworkLookup> {
        Ok(NetworkLookup::new(&self.config.recon)?)
    }

    /// Print `value` as JSON or YAML. Returns false for pretty output so the
    /// caller can render it by hand.
    pub fn print_structured<T: Serialize>(&self, value: &T) -> Result<bool> {
        match self.output_format.render(value)? {
            Some(text) => {
                println!("{text}");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Pretty-print an embedded lookup failure.
fn print_failure(label: &str, error: &str) {
    println!("  {} {}: {}", "✗".red(), label.bold(), error.red());
}
