//! Quiz block state machine.
//!
//! A block moves from unanswered to answered exactly once; every selection
//! after the first is ignored. Markup is re-derived from the stored
//! [`Grading`] rather than mutated in place, so rendering an answered block
//! twice always produces the same output.

use crate::models::Question;

pub const CORRECT_PREFIX: &str = "Correct! ";
pub const INCORRECT_PREFIX: &str = "Not quite. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// The outcome of the one selection a block accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grading {
    pub selected: usize,
    pub verdict: Verdict,
    /// Correct option to highlight when the learner picked a wrong one.
    pub reveal: Option<usize>,
    /// Full feedback line, prefix included.
    pub feedback: String,
}

impl Grading {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

#[derive(Debug, Clone)]
pub struct QuizBlock {
    question: Question,
    grading: Option<Grading>,
}

impl QuizBlock {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            grading: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn is_answered(&self) -> bool {
        self.grading.is_some()
    }

    pub fn grading(&self) -> Option<&Grading> {
        self.grading.as_ref()
    }

    /// Grade the first valid selection. Returns `None` without any state
    /// change when the block is already answered or the index is out of
    /// range.
    ///
    /// A wrong pick is explained with the *correct* option's feedback, so
    /// the learner always leaves with the right answer in hand. A question
    /// with no correct option grades as incorrect with empty feedback
    /// rather than failing.
    pub fn select(&mut self, option_idx: usize) -> Option<&Grading> {
        if self.grading.is_some() {
            return None;
        }
        let option = self.question.options.get(option_idx)?;
        let correct_idx = self.question.correct_index();

        let grading = if option.correct {
            Grading {
                selected: option_idx,
                verdict: Verdict::Correct,
                reveal: None,
                feedback: format!(
                    "{CORRECT_PREFIX}{}",
                    option.feedback.as_deref().unwrap_or_default()
                ),
            }
        } else {
            let correct_feedback = correct_idx
                .and_then(|i| self.question.options[i].feedback.as_deref())
                .unwrap_or_default();
            Grading {
                selected: option_idx,
                verdict: Verdict::Incorrect,
                reveal: correct_idx,
                feedback: format!("{INCORRECT_PREFIX}{correct_feedback}"),
            }
        };

        Some(self.grading.insert(grading))
    }
}
