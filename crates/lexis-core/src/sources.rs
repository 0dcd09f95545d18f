//! Citation aggregation across the term collection.

use std::collections::HashMap;

use crate::entities::{Source, Term};

/// Collect every citation, unique by URL.
///
/// Order is first-seen. When a URL appears again, the later record replaces
/// the stored one in place.
#[must_use]
pub fn collect_sources(terms: &[Term]) -> Vec<Source> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut sources: Vec<Source> = Vec::new();

    for source in terms.iter().flat_map(|term| term.sources.iter()) {
        if let Some(&index) = positions.get(source.url.as_str()) {
            sources[index] = source.clone();
        } else {
            positions.insert(&source.url, sources.len());
            sources.push(source.clone());
        }
    }

    sources
}
