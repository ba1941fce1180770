//! Final score, success rate and result tier.

use serde::Serialize;

use super::engine::{QuizSession, POINTS_PER_CORRECT};

/// Descriptive outcome band keyed by final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    /// Score of 70 or more.
    Celebratory,
    /// Score from 50 up to 69.
    Moderate,
    /// Score below 50.
    Developing,
}

impl ResultTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 70 {
            ResultTier::Celebratory
        } else if score >= 50 {
            ResultTier::Moderate
        } else {
            ResultTier::Developing
        }
    }

    /// Icon, title, message and accent color shown for this tier.
    pub fn copy(self) -> TierCopy {
        match self {
            ResultTier::Celebratory => TierCopy {
                icon: "🎉",
                title: "Tebrikler!",
                message: "Sınavı başarıyla tamamladınız. Q-Line ekibine hoş geldiniz!",
                accent: "#00e5ff",
            },
            ResultTier::Moderate => TierCopy {
                icon: "👍",
                title: "İyi Bir Performans!",
                message: "Başarılı bir performans sergilediniz. Gelişmeye devam edin!",
                accent: "#f39c12",
            },
            ResultTier::Developing => TierCopy {
                icon: "📚",
                title: "Gelişime Açık",
                message: "Tekrar denemenizi öneririz. Pratik yaparak gelişebilirsiniz.",
                accent: "#e74c3c",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub accent: &'static str,
}

/// Everything the result screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: u32,
    pub max_score: u32,
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
    /// Whole percent, rounded half up.
    pub success_rate: u32,
    pub tier: ResultTier,
}

impl QuizSummary {
    pub fn from_session(session: &QuizSession, total: usize) -> Self {
        let score = POINTS_PER_CORRECT * session.correct_count;
        Self {
            score,
            max_score: POINTS_PER_CORRECT * total as u32,
            total,
            correct: session.correct_count,
            incorrect: session.incorrect_count,
            success_rate: success_rate(session.correct_count, total),
            tier: ResultTier::for_score(score),
        }
    }

    /// Success rate as displayed, e.g. `"70%"`.
    pub fn success_rate_label(&self) -> String {
        format!("{}%", self.success_rate)
    }
}

fn success_rate(correct: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = total as u64;
    ((u64::from(correct) * 200 + total) / (total * 2)) as u32
}
