//! Deterministic per-day index selection.
//!
//! The index is derived from the calendar date plus an offset, so every call
//! made on the same day with the same arguments agrees. Different offsets
//! decorrelate selections made against collections of the same length
//! (word of the day vs. fact of the day) without any shared counter.

use chrono::{Datelike, Local, NaiveDate};

/// Offset used for the word of the day.
pub const WORD_OFFSET: i64 = 0;

/// Offset used for the fact of the day.
pub const FACT_OFFSET: i64 = 7;

/// Select an index into a collection of `length` items for today.
///
/// Returns 0 for an empty collection; callers must render the empty state
/// themselves.
#[must_use]
pub fn select(length: usize, offset: i64) -> usize {
    select_on(today(), length, offset)
}

/// Select an index into a collection of `length` items for `date`.
#[must_use]
pub fn select_on(date: NaiveDate, length: usize, offset: i64) -> usize {
    if length == 0 {
        return 0;
    }
    let seed = day_seed(date).wrapping_add(offset);
    let modulus = length as u64;
    usize::try_from(seed.unsigned_abs() % modulus).unwrap_or(0)
}

/// Date-derived seed: `year * 372 + month * 31 + day`, month counted from 0.
#[must_use]
pub fn day_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 372 + i64::from(date.month0()) * 31 + i64::from(date.day())
}

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
