//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::context::Context;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docpin_domain::{ContentItem, ContentKind};
use docpin_store::JsonContentStore;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, ctx: &Context, formatter: &Formatter) -> Result<()> {
    println!("{}", classify(args, ctx, formatter)?);
    Ok(())
}

fn classify(args: ClassifyArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let (catalog, classifier) = ctx.engine(args.cap)?;
    let item = target_item(args, ctx)?;

    let classification = classifier.classify_detailed(&item, &catalog);
    formatter.format_classification(&item.id, &classification)
}

/// Either look the item up in a content file or build one from flags.
fn target_item(args: ClassifyArgs, ctx: &Context) -> Result<ContentItem> {
    if let Some(id) = args.id {
        let path = ctx.content_file(args.file)?;
        let store = JsonContentStore::open(&path)?;
        return store
            .get(&id)
            .ok_or_else(|| CliError::NotFound(format!("No item '{}' in {}", id, path.display())));
    }

    let kind = args.kind.ok_or_else(|| {
        CliError::InvalidInput("Specify --id to look up an item or --kind to describe one".to_string())
    })?;

    let mut item = ContentItem::new("adhoc", ContentKind::parse(&kind))
        .with_title(args.title)
        .with_summary(args.summary)
        .with_body(args.body)
        .with_tags(args.tags);
    item.level = args.level;
    Ok(item)
}
