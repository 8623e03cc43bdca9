//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use osint_api::ServerConfig;
use osint_recon::ReconConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base filter when `RUST_LOG` is unset (e.g. "info", "osint_recon=debug").
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            json: false,
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// API server settings.
    pub server: ServerConfig,

    /// Lookup timeouts, user agent and provider keys.
    pub recon: ReconConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "osint-rs", "osint")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        explicit.map_or_else(Self::path, |p| Ok(p.to_path_buf()))
    }

    /// Load configuration from file; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set a single key, using dotted section names (`recon.whois_timeout_secs`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "server.listen" => self.server.listen = value.parse()?,
            "server.static_dir" => self.server.static_dir = optional(value).map(PathBuf::from),
            "recon.fetch_timeout_secs" => self.recon.fetch_timeout_secs = value.parse()?,
            "recon.whois_timeout_secs" => {
                self.recon.whois_timeout_secs = optional(value).map(str::parse).transpose()?;
            }
            "recon.dns_timeout_secs" => {
                self.recon.dns_timeout_secs = optional(value).map(str::parse).transpose()?;
            }
            "recon.reverse_dns_timeout_secs" => {
                self.recon.reverse_dns_timeout_secs =
                    optional(value).map(str::parse).transpose()?;
            }
            "recon.user_agent" => self.recon.user_agent = value.to_string(),
            "logging.level" => self.logging.level = value.to_string(),
            "logging.json" => self.logging.json = value.parse()?,
            _ => {
                if let Some(provider) = key.strip_prefix("recon.api_keys.") {
                    match optional(value) {
                        Some(v) => {
                            self.recon.api_keys.insert(provider.to_string(), v.to_string());
                        }
                        None => {
                            self.recon.api_keys.remove(provider);
                        }
                    }
                    return Ok(());
                }

                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     output_format                   - Default output format (pretty/json/yaml)\n  \
                     server.listen                   - API listen address (e.g. 127.0.0.1:5000)\n  \
                     server.static_dir               - Frontend build directory (\"none\" to unset)\n  \
                     recon.fetch_timeout_secs        - Page fetch bound in seconds\n  \
                     recon.whois_timeout_secs        - WHOIS bound in seconds (\"none\" to unset)\n  \
                     recon.dns_timeout_secs          - Resolver per-query timeout (\"none\" to unset)\n  \
                     recon.reverse_dns_timeout_secs  - Reverse DNS bound (\"none\" to unset)\n  \
                     recon.user_agent                - User-Agent for page fetches\n  \
                     recon.api_keys.<provider>       - Provider API key (\"none\" to remove)\n  \
                     logging.level                   - Log filter (e.g. info, debug)\n  \
                     logging.json                    - JSON log lines (true/false)",
                    key
                );
            }
        }

        Ok(())
    }
}

/// `"none"` and empty strings clear an optional value.
fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value)
    }
}
