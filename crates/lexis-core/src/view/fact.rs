use chrono::NaiveDate;
use serde::Serialize;

use crate::context::DataContext;
use crate::selector::select_on;

/// Shown when the fact collection is empty.
pub const NO_FACTS: &str = "No facts yet. Add items to data/facts.json";

/// The fact of the day, or the empty state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactView {
    Empty { message: String },
    Entry { fact: String },
}

/// Build the fact-of-the-day view for `date`.
#[must_use]
pub fn fact_of_day(ctx: &DataContext, offset: i64, date: NaiveDate) -> FactView {
    let facts = ctx.facts();
    if facts.is_empty() {
        return FactView::Empty {
            message: NO_FACTS.to_string(),
        };
    }
    FactView::Entry {
        fact: facts[select_on(date, facts.len(), offset)].fact.clone(),
    }
}
