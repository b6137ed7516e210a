//! docpin CLI - Attach curated reference documentation to programming exercises.

use clap::Parser;
use docpin_cli::commands;
use docpin_cli::{Cli, Command, Config, Context, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docpin_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let ctx = Context::new(config, config_path, cli.catalog, cli.rules);

    match cli.command {
        Command::Tag(args) => commands::execute_tag(args, &ctx, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &ctx, &formatter),
        Command::Catalog(args) => commands::execute_catalog(args, &ctx, &formatter),
        Command::Rules(args) => commands::execute_rules(args, &ctx, &formatter),
        Command::Config(args) => commands::execute_config(args, &ctx, &formatter, format),
    }
}
