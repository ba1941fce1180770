//! Multiple-choice quiz flow.
//!
//! [`QuizEngine`] owns a [`QuizSession`] and walks it through an ordered list
//! of [`Question`]s. Every question is worth [`POINTS_PER_CORRECT`]; the
//! finished attempt is summarized by [`QuizSummary`] and banded into a
//! [`ResultTier`].

mod bank;
mod engine;
mod outcome;
mod question;

pub use bank::hr_assessment;
pub use engine::{
    Progress, QuestionPhase, QuizEngine, QuizPhase, QuizSession, Reveal, POINTS_PER_CORRECT,
};
pub use outcome::{QuizSummary, ResultTier, TierCopy};
pub use question::{Question, CHOICE_COUNT};
