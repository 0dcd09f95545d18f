use chrono::NaiveDate;
use serde::Serialize;

use crate::context::DataContext;
use crate::entities::Term;
use crate::selector::select_on;

/// Shown when the term collection is empty.
pub const NO_WORDS: &str = "No words found. Add items to data/words.json";

/// The word of the day, or the empty state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WordView {
    Empty { message: String },
    Entry(WordCard),
}

/// Everything needed to display one term in full.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WordCard {
    pub term: String,
    pub subtitle: Option<String>,
    pub pronunciation: Option<String>,
    pub part_of_speech: Option<String>,
    pub short_definition: Option<String>,
    pub long_definition: Option<String>,
    pub example: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Term> for WordCard {
    fn from(term: &Term) -> Self {
        Self {
            term: term.term.clone(),
            subtitle: subtitle(term),
            pronunciation: term.pronunciation.clone(),
            part_of_speech: term.part_of_speech.clone(),
            short_definition: term.short_definition().map(str::to_string),
            long_definition: term.long_definition().map(str::to_string),
            example: term.example.clone().filter(|e| !e.is_empty()),
            tags: term.tags.clone(),
        }
    }
}

/// Build the word-of-the-day view for `date`.
#[must_use]
pub fn word_of_day(ctx: &DataContext, offset: i64, date: NaiveDate) -> WordView {
    let terms = ctx.terms();
    if terms.is_empty() {
        return WordView::Empty {
            message: NO_WORDS.to_string(),
        };
    }
    WordView::Entry(WordCard::from(&terms[select_on(date, terms.len(), offset)]))
}

/// Pronunciation and part of speech on one line, e.g. `ih-FEM-er-uhl • adjective`.
fn subtitle(term: &Term) -> Option<String> {
    let pron = term.pronunciation.as_deref().filter(|p| !p.is_empty());
    let pos = term.part_of_speech.as_deref().filter(|p| !p.is_empty());
    match (pron, pos) {
        (Some(pron), Some(pos)) => Some(format!("{pron} • {pos}")),
        (Some(pron), None) => Some(pron.to_string()),
        (None, Some(pos)) => Some(format!("• {pos}")),
        (None, None) => None,
    }
}
