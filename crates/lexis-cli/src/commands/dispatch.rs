use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Today => commands::today::handle(ctx, flags),
        Commands::Word(args) => commands::word::handle(args, ctx, flags),
        Commands::Fact(args) => commands::fact::handle(args, ctx, flags),
        Commands::Search(args) => commands::search::handle(args, ctx, flags),
        Commands::Quiz(args) => commands::quiz::handle(args, ctx, flags),
        Commands::Sources => commands::sources::handle(ctx, flags),
        Commands::Theme { .. } | Commands::Schema(_) => {
            unreachable!("theme/schema are pre-dispatched in main")
        }
    }
}
