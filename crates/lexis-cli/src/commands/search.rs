use lexis_core::view::search;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lexis search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = search(&ctx.data, &args.query(), ctx.search_limit());
    tracing::debug!(query = %view.query, total = view.total, "search");
    output(&view, flags.format)
}
