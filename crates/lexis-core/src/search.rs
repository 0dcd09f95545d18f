//! Case-insensitive term search.

use crate::entities::Term;

/// Normalize a raw query: trimmed and lowercased.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Return the terms matching `query`, in their original order.
///
/// An empty (post-trim) query matches everything. Otherwise a term matches
/// when the query occurs in its lowercased text or lowercased short
/// definition.
#[must_use]
pub fn filter<'a>(terms: &'a [Term], query: &str) -> Vec<&'a Term> {
    let needle = normalize_query(query);
    terms.iter().filter(|term| matches(term, &needle)).collect()
}

/// Whether `term` matches an already-normalized query.
#[must_use]
pub fn matches(term: &Term, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    term.term.to_lowercase().contains(needle)
        || term
            .short_definition
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(needle)
}
