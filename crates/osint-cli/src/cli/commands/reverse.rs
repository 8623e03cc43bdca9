//! `osint reverse` - Hostname for an IP address.

use anyhow::Result;
use colored::Colorize;
use osint_core::{Outcome, ReverseLookup};
use osint_recon::LookupClient;

use super::{print_failure, Context};
use crate::cli::args::ReverseArgs;

pub async fn execute(ctx: Context, args: ReverseArgs) -> Result<()> {
    let lookup = ctx.lookup()?;
    let ip = args.ip.trim();
    let result = ReverseLookup {
        hostname: Outcome::from(lookup.reverse_dns(ip).await),
    };

    if !ctx.print_structured(&result)? {
        match &result.hostname {
            Outcome::Found(hostname) => {
                println!("  {:20} {}", ip.cyan(), hostname.green());
            }
            Outcome::Failed(failure) => print_failure(ip, &failure.error),
        }
    }

    Ok(())
}
