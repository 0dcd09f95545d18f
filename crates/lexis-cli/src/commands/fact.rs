use lexis_core::view::fact_of_day;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DailyArgs;
use crate::commands::shared::resolve_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexis fact`.
pub fn handle(args: &DailyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let date = resolve_date(args.date.as_deref())?;
    let offset = args.offset.unwrap_or(ctx.offsets().fact);
    output(&fact_of_day(&ctx.data, offset, date), flags.format)
}
