//! `osint serve` - Start the JSON HTTP API.

use anyhow::Result;
use colored::Colorize;
use osint_api::AppState;

use super::Context;
use crate::cli::args::ServeArgs;

pub async fn execute(ctx: Context, args: ServeArgs) -> Result<()> {
    let mut server = ctx.config.server.clone();
    if let Some(listen) = args.listen {
        server.listen = listen;
    }
    if let Some(dir) = args.static_dir {
        server.static_dir = Some(dir);
    }

    let state = AppState::new(&ctx.config.recon)?;

    eprintln!(
        "{} Serving OSINT API on {}",
        "→".cyan(),
        format!("http://{}", server.listen).bold()
    );
    if let Some(dir) = &server.static_dir {
        eprintln!("  {} {}", "Frontend:".bold(), dir.display());
    }

    osint_api::serve(&server, state).await?;

    Ok(())
}
