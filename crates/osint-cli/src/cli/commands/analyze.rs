//! `osint analyze` - Scrape a page and probe its domain.

use anyhow::{Context as _, Result};
use colored::Colorize;
use osint_core::AggregateReport;
use osint_recon::{PageFetcher, WebsiteAnalyzer};
use std::sync::Arc;

use super::{dns::print_answer, whois::print_whois, Context};
use crate::cli::args::AnalyzeArgs;

pub async fn execute(ctx: Context, args: AnalyzeArgs) -> Result<()> {
    let lookup = Arc::new(ctx.lookup()?);
    let analyzer = WebsiteAnalyzer::new(PageFetcher::new(&ctx.config.recon), lookup);

    let report = analyzer.analyze(&args.url).await?;

    if let Some(path) = &args.export {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        eprintln!("{} Report written to {}", "✓".green(), path.display());
    }

    if !ctx.print_structured(&report)? {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AggregateReport) {
    println!("{} {}", "Website:".bold(), report.url.cyan().bold());
    if !report.domain.is_empty() {
        println!("{} {}", "Domain:".bold(), report.domain);
    }
    println!();

    println!("{}", "Emails:".bold().underline());
    if report.extraction.emails.is_empty() {
        println!("  {}", "none found".dimmed());
    }
    for email in &report.extraction.emails {
        println!("  {}", email.green());
    }
    println!();

    println!("{}", "Social links:".bold().underline());
    if report.extraction.social_links.is_empty() {
        println!("  {}", "none found".dimmed());
    }
    for (platform, links) in &report.extraction.social_links {
        for link in links {
            println!("  {:10} {}", platform.to_string().yellow(), link);
        }
    }
    println!();

    println!("{}", "WHOIS:".bold().underline());
    print_whois(&report.whois);
    println!();

    println!("{}", "DNS:".bold().underline());
    for (record_type, answer) in &report.dns {
        print_answer(record_type, answer);
    }

    let failed = report.failed_lookups();
    if failed > 0 {
        println!();
        println!(
            "{}",
            format!("{failed} lookup(s) failed; see errors above").yellow()
        );
    }
}
