use serde::Serialize;

use crate::context::DataContext;
use crate::entities::Term;
use crate::search::{filter, normalize_query};
use crate::view::sources::SourceLink;

/// Filtered word list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub total: usize,
    pub results: Vec<SearchRow>,
}

/// One row of the word list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRow {
    pub term: String,
    pub part_of_speech: Option<String>,
    pub pronunciation: Option<String>,
    pub short_definition: Option<String>,
    pub sources: Vec<SourceLink>,
}

impl From<&Term> for SearchRow {
    fn from(term: &Term) -> Self {
        Self {
            term: term.term.clone(),
            part_of_speech: term.part_of_speech.clone(),
            pronunciation: term.pronunciation.clone(),
            short_definition: term.short_definition().map(str::to_string),
            sources: term.sources.iter().map(SourceLink::from).collect(),
        }
    }
}

/// Build the word list for `query`.
///
/// `limit` caps the number of rows; `total` always reports the full match
/// count.
#[must_use]
pub fn search(ctx: &DataContext, query: &str, limit: Option<usize>) -> SearchView {
    let matched = filter(ctx.terms(), query);
    let total = matched.len();
    let results = matched
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(SearchRow::from)
        .collect();

    SearchView {
        query: normalize_query(query),
        total,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Source;
    use pretty_assertions::assert_eq;

    fn ctx() -> DataContext {
        DataContext::new(
            vec![
                Term::new("ephemeral")
                    .with_short_definition("lasting a short time")
                    .with_source(Source::new("https://dict.example/ephemeral", None)),
                Term::new("cogent"),
                Term::new("lucid"),
                Term::new("terse"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn rows_carry_source_links() {
        let view = search(&ctx(), " Short ", None);
        assert_eq!(view.query, "short");
        assert_eq!(view.total, 1);
        assert_eq!(view.results[0].term, "ephemeral");
        assert_eq!(
            view.results[0].sources,
            vec![SourceLink {
                name: "https://dict.example/ephemeral".into(),
                url: "https://dict.example/ephemeral".into(),
            }]
        );
    }

    #[test]
    fn limit_caps_rows_but_not_total() {
        let view = search(&ctx(), "", Some(2));
        assert_eq!(view.total, 4);
        assert_eq!(view.results.len(), 2);
        assert_eq!(view.results[1].term, "cogent");
    }

    #[test]
    fn empty_context_yields_no_rows() {
        let view = search(&DataContext::empty(), "anything", None);
        assert_eq!(view.total, 0);
        assert!(view.results.is_empty());
    }
}
