//! Serializable snapshots of widget state.
//!
//! Templates never see the widgets themselves; each view flattens the state a
//! screen needs into plain fields, including the style name for every piece
//! of text whose look depends on state.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use fraude_widgets::{
    Appearance, AwarenessStat, Notification, QuizEngine, QuizSummary, Quote, ResultTier, Reveal,
    StatsCarousel, ThemePreference,
};

use crate::format::{pad_right, progress_bar};

/// Cells in the quiz progress bar.
pub const PROGRESS_WIDTH: usize = 20;

const CHOICE_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// How a single choice is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceState {
    Idle,
    Selected,
    Correct,
    Wrong,
}

impl ChoiceState {
    /// Name of the palette style for this state.
    pub fn style(self) -> &'static str {
        match self {
            ChoiceState::Idle => "choice",
            ChoiceState::Selected => "selected",
            ChoiceState::Correct => "correct",
            ChoiceState::Wrong => "wrong",
        }
    }

    fn for_choice(index: usize, selected: Option<usize>, reveal: Option<Reveal>) -> Self {
        match reveal {
            Some(reveal) if index == reveal.correct_choice => ChoiceState::Correct,
            Some(reveal) if index == reveal.selected => ChoiceState::Wrong,
            Some(_) => ChoiceState::Idle,
            None if selected == Some(index) => ChoiceState::Selected,
            None => ChoiceState::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub letter: char,
    pub text: String,
    pub state: ChoiceState,
    pub style: &'static str,
}

/// Feedback shown between scoring an answer and the next question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealView {
    pub is_correct: bool,
    pub verdict: &'static str,
    pub style: &'static str,
    pub correct_text: String,
}

impl RevealView {
    fn new(reveal: Reveal, correct_text: &str) -> Self {
        let (verdict, style) = if reveal.is_correct {
            ("Doğru!", "correct")
        } else {
            ("Yanlış!", "wrong")
        };
        Self {
            is_correct: reveal.is_correct,
            verdict,
            style,
            correct_text: correct_text.to_string(),
        }
    }
}

/// The question screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    /// One-based position of the question on screen.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub progress_percent: u32,
    pub progress_bar: String,
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
    pub can_advance: bool,
    pub reveal: Option<RevealView>,
}

impl QuestionView {
    /// `None` unless a question is on screen.
    pub fn from_engine(quiz: &QuizEngine) -> Option<Self> {
        let question = quiz.current_question()?;
        let session = quiz.session();
        let progress = quiz.progress();
        let reveal = quiz.reveal();

        let choices = question
            .choices()
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let state = ChoiceState::for_choice(i, session.selected_choice, reveal);
                ChoiceView {
                    letter: CHOICE_LETTERS[i],
                    text: text.clone(),
                    state,
                    style: state.style(),
                }
            })
            .collect();

        Some(Self {
            position: session.current_index + 1,
            total: progress.total,
            score: session.score,
            progress_percent: progress.percent().round() as u32,
            progress_bar: progress_bar(progress.fraction(), PROGRESS_WIDTH),
            prompt: question.prompt().to_string(),
            choices,
            can_advance: quiz.can_advance(),
            reveal: reveal
                .map(|r| RevealView::new(r, &question.choices()[r.correct_choice])),
        })
    }
}

/// The result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub accent: &'static str,
    /// Palette style matching the tier.
    pub tier_style: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub success_rate: String,
}

impl From<&QuizSummary> for ResultView {
    fn from(summary: &QuizSummary) -> Self {
        let copy = summary.tier.copy();
        let tier_style = match summary.tier {
            ResultTier::Celebratory => "celebratory",
            ResultTier::Moderate => "moderate",
            ResultTier::Developing => "developing",
        };
        Self {
            icon: copy.icon,
            title: copy.title,
            message: copy.message,
            accent: copy.accent,
            tier_style,
            score: summary.score,
            max_score: summary.max_score,
            total: summary.total,
            correct: summary.correct,
            incorrect: summary.incorrect,
            success_rate: summary.success_rate_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLineView {
    /// Label with its trailing colon, padded to the widest label.
    pub label: String,
    pub amount: u64,
}

/// The price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub lines: Vec<QuoteLineView>,
    pub total_label: String,
    pub total: u64,
}

impl From<&Quote> for QuoteView {
    fn from(quote: &Quote) -> Self {
        const TOTAL_LABEL: &str = "Toplam:";

        let labels: Vec<String> = quote
            .breakdown
            .iter()
            .map(|item| format!("{}:", item.label))
            .collect();
        let width = labels
            .iter()
            .map(|l| l.width())
            .chain(std::iter::once(TOTAL_LABEL.len()))
            .max()
            .unwrap_or(0);

        let lines = labels
            .iter()
            .zip(&quote.breakdown)
            .map(|(label, item)| QuoteLineView {
                label: pad_right(label, width),
                amount: item.amount,
            })
            .collect();

        Self {
            lines,
            total_label: pad_right(TOTAL_LABEL, width),
            total: quote.total,
        }
    }
}

/// One card of the awareness carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub icon: String,
    pub stat: String,
    pub title: String,
    pub description: String,
    pub position: usize,
    pub total: usize,
    /// `●` for the card on screen, `○` for the rest.
    pub dots: String,
}

impl StatView {
    fn new(stat: &AwarenessStat, carousel: &StatsCarousel) -> Self {
        let dots = carousel
            .dots()
            .into_iter()
            .map(|active| if active { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            icon: stat.icon.clone(),
            stat: stat.stat.clone(),
            title: stat.title.clone(),
            description: stat.description.clone(),
            position: carousel.index() + 1,
            total: carousel.len(),
            dots,
        }
    }
}

impl From<&StatsCarousel> for StatView {
    fn from(carousel: &StatsCarousel) -> Self {
        StatView::new(carousel.current(), carousel)
    }
}

/// The transient toast shown after a mode change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationView {
    pub icon: &'static str,
    pub mode: ThemePreference,
    pub label: &'static str,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        let label = match notification.mode {
            ThemePreference::Dark => "Karanlık mod",
            ThemePreference::Light => "Aydınlık mod",
        };
        Self {
            icon: notification.icon,
            mode: notification.mode,
            label,
        }
    }
}

/// The page-level theme attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppearanceView {
    pub data_theme: ThemePreference,
    pub toggle_icon: &'static str,
    pub background: Option<&'static str>,
    pub text_color: Option<&'static str>,
}

impl From<&Appearance> for AppearanceView {
    fn from(appearance: &Appearance) -> Self {
        Self {
            data_theme: appearance.data_theme,
            toggle_icon: appearance.toggle_icon,
            background: appearance.background,
            text_color: appearance.text_color,
        }
    }
}
