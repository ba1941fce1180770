//! The quiz state machine.
//!
//! ```text
//!            start()/restart()
//!   Start ────────────────────▶ InProgress ──(last question answered)──▶ Finished
//!                                  │   ▲                                   │
//!              select_choice(i)    │   │  tick(): delay elapsed            │
//!                                  ▼   │                                   │
//!              AwaitingSelection ──advance()──▶ Answered                   │
//!                                                                          │
//!   restart() from any state ◀─────────────────────────────────────────────┘
//! ```
//!
//! Scoring happens in `advance()`. The move to the next question is
//! scheduled on a [`Timeline`] and happens on a later [`QuizEngine::tick`];
//! selection stays locked in between.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::error::{Result, WidgetError};
use crate::schedule::{TimerHandle, Timeline};

use super::bank::hr_assessment;
use super::outcome::QuizSummary;
use super::question::{Question, CHOICE_COUNT};

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Micro-state of the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPhase {
    /// Choices are clickable; a selection may or may not exist yet.
    AwaitingSelection,
    /// The answer was scored and revealed; waiting for the delayed move.
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Start,
    InProgress(QuestionPhase),
    Finished,
}

/// Counters of one attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub current_index: usize,
    pub score: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub selected_choice: Option<usize>,
}

/// Correctness shown after an answer is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub selected: usize,
    pub correct_choice: usize,
    pub is_correct: bool,
}

/// Position for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Questions already behind the user.
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizEvent {
    ShowNext,
}

/// Drives one quiz over a fixed, ordered list of questions.
///
/// ```rust
/// use std::time::Duration;
/// use fraude_widgets::{QuizEngine, QuizPhase, SiteConfig};
///
/// let mut quiz = QuizEngine::hr_assessment(&SiteConfig::default());
/// quiz.start();
///
/// quiz.select_choice(0).unwrap();
/// let reveal = quiz.advance().unwrap();
/// assert!(reveal.is_correct);
/// assert_eq!(quiz.session().score, 10);
///
/// quiz.tick(Duration::from_secs(1));
/// assert_eq!(quiz.session().current_index, 1);
/// ```
#[derive(Debug)]
pub struct QuizEngine {
    questions: Vec<Question>,
    session: QuizSession,
    phase: QuizPhase,
    reveal: Option<Reveal>,
    advance_delay: Duration,
    timeline: Timeline<QuizEvent>,
    pending: Option<TimerHandle>,
}

impl QuizEngine {
    /// Creates an engine in the `Start` state.
    pub fn new(questions: Vec<Question>, advance_delay: Duration) -> Result<Self> {
        if questions.is_empty() {
            return Err(WidgetError::EmptyQuestionBank);
        }
        Ok(Self::with_questions(questions, advance_delay))
    }

    /// The built-in assessment with the configured advance delay.
    pub fn hr_assessment(config: &SiteConfig) -> Self {
        Self::with_questions(hr_assessment(), config.quiz_advance_delay())
    }

    fn with_questions(questions: Vec<Question>, advance_delay: Duration) -> Self {
        Self {
            questions,
            session: QuizSession::default(),
            phase: QuizPhase::Start,
            reveal: None,
            advance_delay,
            timeline: Timeline::new(),
            pending: None,
        }
    }

    /// Begins a fresh attempt at the first question.
    pub fn start(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timeline.cancel(handle);
        }
        self.session = QuizSession::default();
        self.reveal = None;
        self.phase = QuizPhase::InProgress(QuestionPhase::AwaitingSelection);
        tracing::debug!(total = self.questions.len(), "quiz started");
    }

    /// Same as [`start`](Self::start); valid from any state.
    pub fn restart(&mut self) {
        self.start();
    }

    /// Records a selection for the current question. Re-selecting replaces
    /// the previous choice.
    pub fn select_choice(&mut self, choice: usize) -> Result<()> {
        match self.phase {
            QuizPhase::InProgress(QuestionPhase::AwaitingSelection) => {}
            QuizPhase::InProgress(QuestionPhase::Answered) => {
                return Err(WidgetError::SelectionLocked)
            }
            QuizPhase::Start | QuizPhase::Finished => return Err(WidgetError::QuizNotInProgress),
        }

        if choice >= CHOICE_COUNT {
            return Err(WidgetError::ChoiceOutOfRange {
                choice,
                len: CHOICE_COUNT,
            });
        }

        self.session.selected_choice = Some(choice);
        Ok(())
    }

    /// Scores the selected choice and schedules the move to the next
    /// question.
    ///
    /// Returns `None` without touching any state when there is nothing to
    /// score: no selection yet, the answer was already revealed, or the quiz
    /// is not running.
    pub fn advance(&mut self) -> Option<Reveal> {
        if self.phase != QuizPhase::InProgress(QuestionPhase::AwaitingSelection) {
            return None;
        }
        let selected = self.session.selected_choice?;

        let question = &self.questions[self.session.current_index];
        let is_correct = question.is_correct(selected);
        let reveal = Reveal {
            selected,
            correct_choice: question.correct_choice(),
            is_correct,
        };

        if is_correct {
            self.session.score += POINTS_PER_CORRECT;
            self.session.correct_count += 1;
        } else {
            self.session.incorrect_count += 1;
        }
        tracing::debug!(
            index = self.session.current_index,
            selected,
            is_correct,
            score = self.session.score,
            "answer scored"
        );

        self.reveal = Some(reveal);
        self.phase = QuizPhase::InProgress(QuestionPhase::Answered);
        self.pending = Some(
            self.timeline
                .schedule(self.advance_delay, QuizEvent::ShowNext),
        );
        Some(reveal)
    }

    /// Moves the engine's clock forward, applying a due transition.
    pub fn tick(&mut self, elapsed: Duration) -> QuizPhase {
        for event in self.timeline.advance(elapsed) {
            match event {
                QuizEvent::ShowNext => self.show_next(),
            }
        }
        self.phase
    }

    fn show_next(&mut self) {
        self.pending = None;
        self.reveal = None;
        self.session.selected_choice = None;
        self.session.current_index += 1;

        if self.session.current_index < self.questions.len() {
            self.phase = QuizPhase::InProgress(QuestionPhase::AwaitingSelection);
        } else {
            self.phase = QuizPhase::Finished;
            tracing::debug!(
                score = self.session.score,
                correct = self.session.correct_count,
                "quiz finished"
            );
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen, if the quiz is running.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::InProgress(_) => self.questions.get(self.session.current_index),
            QuizPhase::Start | QuizPhase::Finished => None,
        }
    }

    /// The revealed answer while the move to the next question is pending.
    pub fn reveal(&self) -> Option<Reveal> {
        self.reveal
    }

    /// Whether choices can be clicked right now.
    pub fn accepts_selection(&self) -> bool {
        self.phase == QuizPhase::InProgress(QuestionPhase::AwaitingSelection)
    }

    /// Whether the "next" control is enabled.
    pub fn can_advance(&self) -> bool {
        self.accepts_selection() && self.session.selected_choice.is_some()
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let completed = match self.phase {
            QuizPhase::Finished => total,
            _ => self.session.current_index,
        };
        Progress { completed, total }
    }

    /// Result screen data, once the last question has been answered.
    pub fn summary(&self) -> Option<QuizSummary> {
        match self.phase {
            QuizPhase::Finished => Some(QuizSummary::from_session(
                &self.session,
                self.questions.len(),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    fn two_questions() -> QuizEngine {
        let questions = vec![
            Question::new("first", ["a", "b", "c", "d"], 1).unwrap(),
            Question::new("second", ["a", "b", "c", "d"], 3).unwrap(),
        ];
        QuizEngine::new(questions, DELAY).unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert!(matches!(
            QuizEngine::new(Vec::new(), DELAY),
            Err(WidgetError::EmptyQuestionBank)
        ));
    }

    #[test]
    fn built_in_bank_matches_explicit_construction() {
        let config = SiteConfig::default();
        let built_in = QuizEngine::hr_assessment(&config);
        let explicit = QuizEngine::new(hr_assessment(), config.quiz_advance_delay()).unwrap();

        assert_eq!(built_in.questions(), explicit.questions());
        assert_eq!(built_in.phase(), explicit.phase());
        assert_eq!(built_in.session(), explicit.session());
        assert_eq!(built_in.advance_delay, explicit.advance_delay);
    }

    #[test]
    fn starts_in_start_state() {
        let quiz = two_questions();
        assert_eq!(quiz.phase(), QuizPhase::Start);
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn select_before_start_is_rejected() {
        let mut quiz = two_questions();
        assert!(matches!(
            quiz.select_choice(0),
            Err(WidgetError::QuizNotInProgress)
        ));
    }

    #[test]
    fn reselecting_overwrites() {
        let mut quiz = two_questions();
        quiz.start();
        quiz.select_choice(0).unwrap();
        quiz.select_choice(1).unwrap();

        assert_eq!(quiz.session().selected_choice, Some(1));
        assert_eq!(quiz.session().score, 0);
        assert!(quiz.advance().unwrap().is_correct);
    }

    #[test]
    fn out_of_range_choice_leaves_selection() {
        let mut quiz = two_questions();
        quiz.start();
        quiz.select_choice(2).unwrap();

        assert!(matches!(
            quiz.select_choice(4),
            Err(WidgetError::ChoiceOutOfRange { choice: 4, len: 4 })
        ));
        assert_eq!(quiz.session().selected_choice, Some(2));
    }

    #[test]
    fn selection_is_locked_during_delay() {
        let mut quiz = two_questions();
        quiz.start();
        quiz.select_choice(0).unwrap();
        let reveal = quiz.advance().unwrap();

        assert!(!reveal.is_correct);
        assert_eq!(reveal.correct_choice, 1);
        assert!(matches!(
            quiz.select_choice(1),
            Err(WidgetError::SelectionLocked)
        ));
        assert!(quiz.advance().is_none());
        assert_eq!(quiz.session().incorrect_count, 1);
    }

    #[test]
    fn moves_on_only_after_delay() {
        let mut quiz = two_questions();
        quiz.start();
        quiz.select_choice(1).unwrap();
        quiz.advance();

        assert_eq!(
            quiz.tick(Duration::from_millis(999)),
            QuizPhase::InProgress(QuestionPhase::Answered)
        );
        assert_eq!(
            quiz.tick(Duration::from_millis(1)),
            QuizPhase::InProgress(QuestionPhase::AwaitingSelection)
        );
        assert_eq!(quiz.current_question().unwrap().prompt(), "second");
        assert_eq!(quiz.session().selected_choice, None);
        assert!(quiz.reveal().is_none());
    }

    #[test]
    fn restart_during_delay_cancels_transition() {
        let mut quiz = two_questions();
        quiz.start();
        quiz.select_choice(1).unwrap();
        quiz.advance();
        quiz.restart();

        quiz.tick(Duration::from_secs(5));
        assert_eq!(quiz.session(), &QuizSession::default());
        assert_eq!(
            quiz.phase(),
            QuizPhase::InProgress(QuestionPhase::AwaitingSelection)
        );
    }

    #[test]
    fn progress_tracks_index() {
        let mut quiz = two_questions();
        quiz.start();
        assert_eq!(quiz.progress().percent(), 0.0);

        quiz.select_choice(1).unwrap();
        quiz.advance();
        quiz.tick(DELAY);
        assert_eq!(quiz.progress().percent(), 50.0);

        quiz.select_choice(3).unwrap();
        quiz.advance();
        quiz.tick(DELAY);
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.progress().percent(), 100.0);
        assert_eq!(quiz.summary().unwrap().score, 20);
    }

    #[test]
    fn can_advance_needs_selection() {
        let mut quiz = two_questions();
        quiz.start();
        assert!(!quiz.can_advance());
        quiz.select_choice(0).unwrap();
        assert!(quiz.can_advance());
    }
}
