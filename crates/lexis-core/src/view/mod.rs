//! View models.
//!
//! Pure functions that map the data context to structured, serializable
//! views. Nothing here knows how a view is drawn; a rendering adapter (the
//! CLI output layer) turns these into text, tables or JSON.

mod fact;
mod page;
mod quiz;
mod search;
mod sources;
mod word;

pub use fact::{FactView, NO_FACTS, fact_of_day};
pub use page::{DailyOffsets, PageView, page};
pub use quiz::{NO_QUIZ, OptionState, OptionView, QuizCard, QuizOutcome, QuizView};
pub use search::{SearchRow, SearchView, search};
pub use sources::{NO_SOURCES, SourceLink, SourcesView, sources};
pub use word::{NO_WORDS, WordCard, WordView, word_of_day};
