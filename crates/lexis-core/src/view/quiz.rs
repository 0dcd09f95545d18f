use serde::Serialize;

use crate::errors::CoreError;
use crate::quiz::{Question, QuizError};

/// Shown when there are too few terms for a question.
pub const NO_QUIZ: &str = "Add at least 4 words to words.json to enable the quiz.";

/// Display state of a single option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionState {
    /// Not answered yet; selectable.
    Pending,
    /// The correct answer, revealed after a choice.
    Correct,
    /// The chosen option, when it was wrong.
    Wrong,
    /// Answered; neither chosen nor correct.
    Inert,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub state: OptionState,
}

/// A question ready for display, or the reason there is none.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizView {
    Unavailable {
        message: String,
    },
    Question {
        prompt: String,
        answered: bool,
        options: Vec<OptionView>,
    },
}

impl From<QuizError> for QuizView {
    fn from(error: QuizError) -> Self {
        match error {
            QuizError::InsufficientData { .. } => Self::Unavailable {
                message: NO_QUIZ.to_string(),
            },
        }
    }
}

/// Result of the first choice made on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub chosen: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}

/// A question plus the presentation state of its options.
///
/// Only the first choice counts. Once answered every option is inert, and
/// later choices return the first outcome unchanged.
#[derive(Debug, Clone)]
pub struct QuizCard<'a> {
    question: Question<'a>,
    outcome: Option<QuizOutcome>,
}

impl<'a> QuizCard<'a> {
    #[must_use]
    pub const fn new(question: Question<'a>) -> Self {
        Self {
            question,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn question(&self) -> &Question<'a> {
        &self.question
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    /// Choose the option at `index` (zero-based).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `index` is out of range and the
    /// card has not been answered yet.
    pub fn choose(&mut self, index: usize) -> Result<QuizOutcome, CoreError> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }
        if index >= self.question.options.len() {
            return Err(CoreError::Validation(format!(
                "option {} is out of range (1-{})",
                index + 1,
                self.question.options.len()
            )));
        }
        let outcome = QuizOutcome {
            chosen: index,
            correct_index: self.question.correct_index,
            is_correct: self.question.is_correct(index),
        };
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Current view of the card.
    #[must_use]
    pub fn view(&self) -> QuizView {
        let options = self
            .question
            .options
            .iter()
            .enumerate()
            .map(|(index, term)| OptionView {
                label: term.term.clone(),
                state: self.state_of(index),
            })
            .collect();

        QuizView::Question {
            prompt: self.question.prompt.clone(),
            answered: self.is_answered(),
            options,
        }
    }

    fn state_of(&self, index: usize) -> OptionState {
        match self.outcome {
            None => OptionState::Pending,
            Some(outcome) if index == outcome.correct_index => OptionState::Correct,
            Some(outcome) if index == outcome.chosen => OptionState::Wrong,
            Some(_) => OptionState::Inert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Term;
    use crate::quiz::next_question;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn terms() -> Vec<Term> {
        ["ephemeral", "cogent", "lucid", "terse"]
            .into_iter()
            .map(Term::new)
            .collect()
    }

    fn states(view: &QuizView) -> Vec<OptionState> {
        match view {
            QuizView::Question { options, .. } => options.iter().map(|o| o.state).collect(),
            QuizView::Unavailable { .. } => Vec::new(),
        }
    }

    #[test]
    fn unanswered_card_is_all_pending() {
        let terms = terms();
        let mut rng = StdRng::seed_from_u64(11);
        let card = QuizCard::new(next_question(&terms, &mut rng).expect("question"));
        assert_eq!(states(&card.view()), vec![OptionState::Pending; 4]);
    }

    #[test]
    fn correct_choice_marks_only_that_option() {
        let terms = terms();
        let mut rng = StdRng::seed_from_u64(11);
        let mut card = QuizCard::new(next_question(&terms, &mut rng).expect("question"));
        let correct = card.question().correct_index;

        let outcome = card.choose(correct).expect("choose");
        assert!(outcome.is_correct);

        let states = states(&card.view());
        assert_eq!(states[correct], OptionState::Correct);
        assert_eq!(
            states.iter().filter(|s| **s == OptionState::Inert).count(),
            3
        );
    }

    #[test]
    fn wrong_choice_reveals_correct_and_locks_card() {
        let terms = terms();
        let mut rng = StdRng::seed_from_u64(23);
        let mut card = QuizCard::new(next_question(&terms, &mut rng).expect("question"));
        let correct = card.question().correct_index;
        let wrong = (correct + 1) % 4;

        let first = card.choose(wrong).expect("choose");
        assert!(!first.is_correct);

        // Later choices, even of the right answer, change nothing.
        assert_eq!(card.choose(correct).expect("choose"), first);

        let states = states(&card.view());
        assert_eq!(states[correct], OptionState::Correct);
        assert_eq!(states[wrong], OptionState::Wrong);
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let terms = terms();
        let mut rng = StdRng::seed_from_u64(1);
        let mut card = QuizCard::new(next_question(&terms, &mut rng).expect("question"));
        assert!(card.choose(4).is_err());
        assert!(!card.is_answered());
    }

    #[test]
    fn insufficient_data_maps_to_unavailable() {
        let view = QuizView::from(QuizError::InsufficientData {
            required: 4,
            available: 2,
        });
        assert_eq!(
            view,
            QuizView::Unavailable {
                message: NO_QUIZ.into()
            }
        );
    }
}
