//! Multiple-choice quiz generation.
//!
//! One correct term is drawn uniformly from the whole collection, three
//! distractors are drawn from the rest, and the four options are presented
//! in uniformly random order. Both shuffles are Fisher–Yates via
//! [`SliceRandom::shuffle`]. Randomness is injected so callers decide between
//! an entropy-seeded RNG (every attempt differs) and a fixed seed (tests).

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::entities::Term;

/// Number of options in every question.
pub const OPTION_COUNT: usize = 4;

/// Prompt used when the correct term has no definition at all.
pub const MISSING_DEFINITION: &str = "Definition unavailable — add one in words.json.";

/// Quiz generation failures.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Not enough distinct terms to fill every option slot.
    #[error("insufficient data: need at least {required} distinct terms, found {available}")]
    InsufficientData { required: usize, available: usize },
}

/// A generated question. Borrows its options from the source collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question<'a> {
    pub prompt: String,
    pub options: Vec<&'a Term>,
    pub correct_index: usize,
}

impl<'a> Question<'a> {
    /// The correct option.
    #[must_use]
    pub fn correct(&self) -> &'a Term {
        self.options[self.correct_index]
    }

    /// Whether the option at `index` is the correct one.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Generate the next question from `terms`.
///
/// # Errors
///
/// Returns [`QuizError::InsufficientData`] when fewer than [`OPTION_COUNT`]
/// terms are available, or when duplicates leave fewer than three distinct
/// distractors.
pub fn next_question<'a, R: Rng + ?Sized>(
    terms: &'a [Term],
    rng: &mut R,
) -> Result<Question<'a>, QuizError> {
    let insufficient = |available| QuizError::InsufficientData {
        required: OPTION_COUNT,
        available,
    };

    if terms.len() < OPTION_COUNT {
        return Err(insufficient(terms.len()));
    }

    let correct_idx = rng.gen_range(0..terms.len());
    let correct = &terms[correct_idx];

    let mut seen: HashSet<&str> = HashSet::from([correct.term.as_str()]);
    let mut pool: Vec<&Term> = terms
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != correct_idx)
        .map(|(_, term)| term)
        .filter(|term| seen.insert(term.term.as_str()))
        .collect();

    if pool.len() < OPTION_COUNT - 1 {
        return Err(insufficient(pool.len() + 1));
    }

    pool.shuffle(rng);

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct);
    options.extend(pool.into_iter().take(OPTION_COUNT - 1));
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|term| std::ptr::eq(*term, correct))
        .unwrap_or_default();

    Ok(Question {
        prompt: correct.definition().unwrap_or(MISSING_DEFINITION).to_string(),
        options,
        correct_index,
    })
}
