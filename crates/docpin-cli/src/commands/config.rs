//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, ctx: &Context, formatter: &Formatter, format: OutputFormat) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let rendered = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&ctx.config)?,
                _ => ctx.config.to_toml()?,
            };
            println!("{}", rendered);
        }
        ConfigAction::Path => println!("{}", ctx.config_path.display()),
        ConfigAction::Init { force } => {
            init(ctx, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote {}", ctx.config_path.display()))
            );
        }
    }
    Ok(())
}

/// Write a default configuration file.
fn init(ctx: &Context, force: bool) -> Result<()> {
    if ctx.config_path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            ctx.config_path.display()
        )));
    }
    Config::default().save(&ctx.config_path)
}
