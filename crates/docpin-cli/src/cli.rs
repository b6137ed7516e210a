//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docpin - Recommend curated reference documentation for exercises.
#[derive(Debug, Parser)]
#[command(name = "docpin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCPIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog TOML file replacing the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Rules TOML file replacing the built-in rule batteries
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (keys or URLs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Attach references to every untagged item of a content file
    Tag(TagArgs),

    /// Show the references recommended for a single item
    Classify(ClassifyArgs),

    /// Inspect the reference catalog
    Catalog(CatalogArgs),

    /// Print the active rule batteries
    Rules(RulesArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the tag command.
#[derive(Debug, Parser)]
pub struct TagArgs {
    /// Content file (defaults to `content_file` from the configuration)
    pub file: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Reclassify items that already have references
    #[arg(long)]
    pub force: bool,

    /// Maximum number of references per item
    #[arg(long)]
    pub cap: Option<usize>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Content file to look the item up in
    pub file: Option<PathBuf>,

    /// Id of an item in the content file
    #[arg(long, conflicts_with = "kind")]
    pub id: Option<String>,

    /// Kind of an ad-hoc item (javascript, html, css, ...)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Title of an ad-hoc item
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Summary of an ad-hoc item
    #[arg(short, long, default_value = "")]
    pub summary: String,

    /// Body of an ad-hoc item
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Tag of an ad-hoc item (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Difficulty level of an ad-hoc item
    #[arg(short, long)]
    pub level: Option<u8>,

    /// Maximum number of references
    #[arg(long)]
    pub cap: Option<usize>,
}

/// Arguments for catalog inspection.
#[derive(Debug, Parser)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,
}

/// Catalog actions.
#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// List all entries
    List,

    /// Show one entry
    Show {
        /// Entry key
        key: String,
    },
}

/// Arguments for the rules command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Only print the battery for this kind
    #[arg(short, long)]
    pub kind: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_command() {
        let cli = Cli::parse_from(["docpin", "tag", "exercises.json", "--dry-run", "--cap", "2"]);
        match cli.command {
            Command::Tag(args) => {
                assert_eq!(args.file, Some(PathBuf::from("exercises.json")));
                assert!(args.dry_run);
                assert!(!args.force);
                assert_eq!(args.cap, Some(2));
            }
            _ => panic!("Expected Tag command"),
        }
    }

    #[test]
    fn test_classify_ad_hoc() {
        let cli = Cli::parse_from([
            "docpin", "classify", "--kind", "css", "--title", "Flexbox nav", "--tag", "layout",
            "--tag", "flex",
        ]);
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.kind.as_deref(), Some("css"));
                assert_eq!(args.tags, vec!["layout", "flex"]);
                assert!(args.id.is_none());
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_id_conflicts_with_kind() {
        let result = Cli::try_parse_from(["docpin", "classify", "--id", "a", "--kind", "css"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["docpin", "catalog", "list", "--format", "json", "-v"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
