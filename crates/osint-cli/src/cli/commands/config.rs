//! `osint config` - Manage CLI configuration.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    for key in config.recon.api_keys.values_mut() {
        *key = mask(key);
    }

    if !ctx.print_structured(&config)? {
        println!("{}", "Current Configuration:".bold());
        println!("  {} {}", "file:".bold(), ctx.config_path.display());
        println!();
        print!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

fn set_config(ctx: Context, key: &str, value: &str) -> Result<()> {
    let mut config: Config = ctx.config;
    config.set(key, value)?;
    config.save_to(&ctx.config_path)?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());
    Ok(())
}

fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}
