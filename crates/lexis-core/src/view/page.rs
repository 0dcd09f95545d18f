use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::context::DataContext;
use crate::selector::{FACT_OFFSET, WORD_OFFSET};
use crate::theme::Theme;
use crate::view::fact::{FactView, fact_of_day};
use crate::view::word::{WordView, word_of_day};

/// Seed offsets for the two daily selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOffsets {
    pub word: i64,
    pub fact: i64,
}

impl Default for DailyOffsets {
    fn default() -> Self {
        Self {
            word: WORD_OFFSET,
            fact: FACT_OFFSET,
        }
    }
}

/// The landing page: both daily picks plus page chrome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub year: i32,
    pub date: NaiveDate,
    pub theme: Theme,
    pub word: WordView,
    pub fact: FactView,
}

#[must_use]
pub fn page(ctx: &DataContext, offsets: DailyOffsets, date: NaiveDate, theme: Theme) -> PageView {
    PageView {
        year: date.year(),
        date,
        theme,
        word: word_of_day(ctx, offsets.word, date),
        fact: fact_of_day(ctx, offsets.fact, date),
    }
}
