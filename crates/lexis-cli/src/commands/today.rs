use lexis_config::LexisConfig;
use lexis_core::selector::today;
use lexis_core::theme::load_theme;
use lexis_core::{Theme, view};

use crate::cli::GlobalFlags;
use crate::context::{AppContext, preference_store};
use crate::output::output;

/// Handle `lexis today`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = current_theme(&ctx.config);
    let page = view::page(&ctx.data, ctx.offsets(), today(), theme);
    output(&page, flags.format)
}

/// Stored theme, or the default when the store cannot be read.
fn current_theme(config: &LexisConfig) -> Theme {
    preference_store(config)
        .and_then(|store| load_theme(&store).map_err(anyhow::Error::from))
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "could not read theme preference; using default");
            Theme::default()
        })
}
