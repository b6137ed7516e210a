//! Tag command implementation.

use crate::cli::TagArgs;
use crate::context::Context;
use crate::error::Result;
use crate::output::Formatter;
use docpin_enricher::Enricher;
use docpin_store::JsonContentStore;

/// Execute the tag command.
pub fn execute_tag(args: TagArgs, ctx: &Context, formatter: &Formatter) -> Result<()> {
    println!("{}", tag(args, ctx, formatter)?);
    Ok(())
}

/// Run the enricher over a content file and render the report.
fn tag(args: TagArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let path = ctx.content_file(args.file)?;
    let (catalog, classifier) = ctx.engine(args.cap)?;

    let mut config = ctx.config.enricher.clone();
    config.dry_run |= args.dry_run;
    config.force |= args.force;
    let dry_run = config.dry_run;

    let mut store = JsonContentStore::open(&path)?;
    let report = Enricher::new(config).run(&mut store, &classifier, &catalog)?;

    formatter.format_report(&report, dry_run)
}
