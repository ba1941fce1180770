//! Rotating mental-health awareness statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// One card of the awareness widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwarenessStat {
    pub icon: String,
    /// Headline figure, e.g. `"%90"`.
    pub stat: String,
    pub title: String,
    pub description: String,
}

impl AwarenessStat {
    pub fn new(
        icon: impl Into<String>,
        stat: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            stat: stat.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The five cards shown on the mental-health page.
pub fn awareness_stats() -> Vec<AwarenessStat> {
    vec![
        AwarenessStat::new(
            "🧠",
            "4'te 1",
            "Küresel Ruh Sağlığı Krizi",
            "kişi yılda ruh sağlığı sorunları yaşar",
        ),
        AwarenessStat::new(
            "💚",
            "%90",
            "İntihar Önleme Etkisi",
            "intiharlar uygun destek ile önlenebilir",
        ),
        AwarenessStat::new(
            "🎮",
            "%78",
            "Oyun ve Ruh Sağlığı",
            "oyuncular oyun oynayarak ruh sağlığı iyileşmesi bildiriyor",
        ),
        AwarenessStat::new(
            "🤝",
            "%2",
            "Bizim Misyonumuz",
            "karımızı ruh sağlığı tesislerine bağışlıyoruz",
        ),
        AwarenessStat::new(
            "🌟",
            "İyileşme",
            "Umut ve İyileşme",
            "her zaman mümkün. Yalnız değilsin.",
        ),
    ]
}

/// Wrap-around navigation over a fixed list of stats.
///
/// ```rust
/// use fraude_widgets::StatsCarousel;
///
/// let mut carousel = StatsCarousel::awareness();
/// carousel.previous();
/// assert_eq!(carousel.index(), 4);
/// carousel.next();
/// assert_eq!(carousel.index(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct StatsCarousel {
    stats: Vec<AwarenessStat>,
    index: usize,
}

impl StatsCarousel {
    pub fn new(stats: Vec<AwarenessStat>) -> Result<Self> {
        if stats.is_empty() {
            return Err(WidgetError::EmptyStats);
        }
        Ok(Self { stats, index: 0 })
    }

    pub fn awareness() -> Self {
        Self {
            stats: awareness_stats(),
            index: 0,
        }
    }

    pub fn next(&mut self) -> &AwarenessStat {
        self.index = (self.index + 1) % self.stats.len();
        self.current()
    }

    pub fn previous(&mut self) -> &AwarenessStat {
        let len = self.stats.len();
        self.index = (self.index + len - 1) % len;
        self.current()
    }

    pub fn current(&self) -> &AwarenessStat {
        &self.stats[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Always `false`; a carousel cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Progress dots, `true` for the card on screen.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.stats.len()).map(|i| i == self.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            StatsCarousel::new(Vec::new()),
            Err(WidgetError::EmptyStats)
        ));
    }

    #[test]
    fn next_wraps_to_first() {
        let mut carousel = StatsCarousel::awareness();
        for _ in 0..carousel.len() {
            carousel.next();
        }
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current().icon, "🧠");
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut carousel = StatsCarousel::awareness();
        let last = carousel.previous().clone();
        assert_eq!(last.title, "Umut ve İyileşme");
    }

    #[test]
    fn single_entry_stays_put() {
        let mut carousel =
            StatsCarousel::new(vec![AwarenessStat::new("x", "1", "t", "d")]).unwrap();
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn exactly_one_dot_is_active() {
        let mut carousel = StatsCarousel::awareness();
        carousel.next();
        carousel.next();
        let dots = carousel.dots();
        assert_eq!(dots.len(), 5);
        assert_eq!(dots.iter().filter(|d| **d).count(), 1);
        assert!(dots[2]);
    }
}
