//! Rules command implementation.

use crate::cli::RulesArgs;
use crate::context::Context;
use crate::error::Result;
use crate::output::Formatter;
use docpin_domain::ContentKind;

/// Execute the rules command.
pub fn execute_rules(args: RulesArgs, ctx: &Context, formatter: &Formatter) -> Result<()> {
    let registry = ctx.registry()?;
    let kind = args.kind.as_deref().map(ContentKind::parse);
    println!("{}", formatter.format_rules(&registry, kind.as_ref())?);
    Ok(())
}
