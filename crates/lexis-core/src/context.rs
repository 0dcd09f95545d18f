//! The read-only data context shared by every component.

use crate::entities::{Fact, Term};

/// Both collections, loaded once and never mutated afterwards.
///
/// Components receive a `&DataContext` instead of reaching for shared global
/// state. Only shared borrows of the collections are handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataContext {
    terms: Vec<Term>,
    facts: Vec<Fact>,
}

impl DataContext {
    #[must_use]
    pub const fn new(terms: Vec<Term>, facts: Vec<Fact>) -> Self {
        Self { terms, facts }
    }

    /// A context with both collections empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_has_no_data() {
        let ctx = DataContext::empty();
        assert!(ctx.terms().is_empty());
        assert!(ctx.facts().is_empty());
    }
}
