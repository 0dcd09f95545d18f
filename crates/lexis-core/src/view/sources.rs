use serde::Serialize;

use crate::context::DataContext;
use crate::entities::Source;
use crate::sources::collect_sources;

/// Shown when no term carries a citation.
pub const NO_SOURCES: &str = "No sources added yet. Edit data/words.json to add citations.";

/// A citation ready for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceLink {
    pub name: String,
    pub url: String,
}

impl From<&Source> for SourceLink {
    fn from(source: &Source) -> Self {
        Self {
            name: source.label().to_string(),
            url: source.url.clone(),
        }
    }
}

/// Every citation across the term collection, or the empty state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourcesView {
    Empty { message: String },
    List { sources: Vec<SourceLink> },
}

/// Build the sources view.
#[must_use]
pub fn sources(ctx: &DataContext) -> SourcesView {
    let collected = collect_sources(ctx.terms());
    if collected.is_empty() {
        return SourcesView::Empty {
            message: NO_SOURCES.to_string(),
        };
    }
    SourcesView::List {
        sources: collected.iter().map(SourceLink::from).collect(),
    }
}
