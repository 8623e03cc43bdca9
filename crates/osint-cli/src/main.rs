//! osint - OSINT lookup service
//!
//! Serves the JSON API or runs a single lookup from the terminal.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    osint_cli::run().await
}
