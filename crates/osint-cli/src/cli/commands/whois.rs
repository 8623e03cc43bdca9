//! `osint whois` - Registration data for a domain.

use anyhow::Result;
use colored::Colorize;
use osint_core::{DomainRecord, Outcome};
use osint_recon::LookupClient;

use super::{print_failure, Context};
use crate::cli::args::WhoisArgs;

pub async fn execute(ctx: Context, args: WhoisArgs) -> Result<()> {
    let lookup = ctx.lookup()?;
    let outcome = Outcome::from(lookup.whois(args.domain.trim()).await);

    if !ctx.print_structured(&outcome)? {
        println!("{} {}", "WHOIS:".bold(), args.domain.cyan().bold());
        println!();
        print_whois(&outcome);
    }

    Ok(())
}

pub(super) fn print_whois(outcome: &Outcome<DomainRecord>) {
    match outcome {
        Outcome::Found(record) => print_record(record),
        Outcome::Failed(failure) => print_failure("WHOIS", &failure.error),
    }
}

fn print_record(record: &DomainRecord) {
    let field = |label: &str, value: Option<&String>| {
        let value = value.map_or_else(|| "-".dimmed().to_string(), Clone::clone);
        println!("  {:16} {}", format!("{label}:").bold(), value);
    };

    field("Registrar", record.registrar.as_ref());
    field("Created", record.creation_date.as_ref());
    field("Expires", record.expiration_date.as_ref());

    if !record.name_servers.is_empty() {
        println!("  {}", "Name servers:".bold());
        for ns in &record.name_servers {
            println!("    {}", ns.green());
        }
    }

    if let Some(status) = &record.status {
        println!("  {}", "Status:".bold());
        for s in status {
            println!("    {}", s.yellow());
        }
    }
}
