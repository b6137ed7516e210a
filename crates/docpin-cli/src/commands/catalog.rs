//! Catalog command implementation.

use crate::cli::{CatalogAction, CatalogArgs};
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the catalog command.
pub fn execute_catalog(args: CatalogArgs, ctx: &Context, formatter: &Formatter) -> Result<()> {
    println!("{}", catalog(args, ctx, formatter)?);
    Ok(())
}

fn catalog(args: CatalogArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let catalog = ctx.catalog()?;

    match args.action {
        CatalogAction::List => formatter.format_catalog(catalog.iter()),
        CatalogAction::Show { key } => {
            let entry = catalog
                .get(&key)
                .ok_or_else(|| CliError::NotFound(format!("No catalog entry '{}'", key)))?;
            formatter.format_entry(entry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputFormat};
    use std::path::PathBuf;

    fn ctx() -> Context {
        Context::new(Config::default(), PathBuf::new(), None, None)
    }

    #[test]
    fn test_list_keys() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = catalog(CatalogArgs { action: CatalogAction::List }, &ctx(), &formatter).unwrap();
        assert!(output.lines().any(|line| line == "css-flexbox"));
        assert!(output.lines().any(|line| line == "html-basics"));
    }

    #[test]
    fn test_show_entry() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = CatalogArgs {
            action: CatalogAction::Show { key: "array-map".into() },
        };
        let output = catalog(args, &ctx(), &formatter).unwrap();
        assert!(output.contains("Array/map"));
    }

    #[test]
    fn test_show_unknown_entry() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = CatalogArgs {
            action: CatalogAction::Show { key: "nope".into() },
        };
        assert!(matches!(catalog(args, &ctx(), &formatter), Err(CliError::NotFound(_))));
    }
}
