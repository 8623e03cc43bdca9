//! `osint dns` - Resolve records of one type for a domain.

use anyhow::Result;
use colored::Colorize;
use osint_core::{DnsAnswer, DnsLookup, Outcome};
use osint_recon::LookupClient;

use super::{print_failure, Context};
use crate::cli::args::DnsArgs;

pub async fn execute(ctx: Context, args: DnsArgs) -> Result<()> {
    let lookup = ctx.lookup()?;
    let domain = args.domain.trim();
    let records = Outcome::from(lookup.resolve(domain, &args.record_type).await);
    let result = DnsLookup { records };

    if !ctx.print_structured(&result)? {
        println!(
            "{} {} {}",
            "DNS:".bold(),
            domain.cyan().bold(),
            args.record_type.to_uppercase().yellow()
        );
        println!();
        print_answer(&args.record_type.to_uppercase(), &result.records);
    }

    Ok(())
}

pub(super) fn print_answer(record_type: &str, answer: &DnsAnswer) {
    match answer {
        Outcome::Found(values) => {
            for value in values {
                println!("  {:6} {}", record_type.yellow(), value);
            }
        }
        Outcome::Failed(failure) => print_failure(record_type, &failure.error),
    }
}
