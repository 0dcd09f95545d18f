use lexis_core::{Fact, Term};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaKind};

/// Handle `lexis schema`.
///
/// Always prints JSON, whatever `--format` says: the output is meant to be
/// saved next to the data files.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.kind)?);
    Ok(())
}

fn render(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Terms => schema_for!(Vec<Term>),
        SchemaKind::Facts => schema_for!(Vec<Fact>),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
