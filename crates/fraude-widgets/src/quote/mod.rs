//! Price-quote calculation for game development services.
//!
//! [`compute_quote`] is a pure function: the same [`QuoteInputs`] always give
//! the same [`Quote`].
//!
//! ```rust
//! use fraude_widgets::{compute_quote, AddOn, QuoteInputs};
//!
//! let inputs = QuoteInputs::new(2, 5000).with_add_on(AddOn::AudioDesign);
//! let quote = compute_quote(&inputs);
//!
//! assert_eq!(quote.total, 26_000);
//! let amounts: Vec<u64> = quote.breakdown.iter().map(|item| item.amount).collect();
//! assert_eq!(amounts, vec![5000, 6000, 15_000]);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Cost of developing one level.
pub const LEVEL_COST: u64 = 3000;

/// The base-fee tiers offered by the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    /// Level work only, no base fee.
    Starter,
    Standard,
    Premium,
    Studio,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 4] = [
        ServiceTier::Starter,
        ServiceTier::Standard,
        ServiceTier::Premium,
        ServiceTier::Studio,
    ];

    pub fn fee(self) -> u64 {
        match self {
            ServiceTier::Starter => 0,
            ServiceTier::Standard => 5_000,
            ServiceTier::Premium => 25_000,
            ServiceTier::Studio => 50_000,
        }
    }
}

/// Optional flat-fee services. The declaration order is the order they
/// appear in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOn {
    AudioDesign,
    NarrativeDesign,
    PlaytestOptimization,
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [
        AddOn::AudioDesign,
        AddOn::NarrativeDesign,
        AddOn::PlaytestOptimization,
    ];

    pub fn fee(self) -> u64 {
        match self {
            AddOn::AudioDesign => 15_000,
            AddOn::NarrativeDesign => 18_000,
            AddOn::PlaytestOptimization => 10_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddOn::AudioDesign => "Ses & Ambiyans",
            AddOn::NarrativeDesign => "Narrative Design",
            AddOn::PlaytestOptimization => "Playtest",
        }
    }
}

/// Form state of the quote calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInputs {
    pub level_count: u32,
    pub base_service_fee: u64,
    pub add_ons: BTreeSet<AddOn>,
}

impl QuoteInputs {
    pub fn new(level_count: u32, base_service_fee: u64) -> Self {
        Self {
            level_count,
            base_service_fee,
            add_ons: BTreeSet::new(),
        }
    }

    pub fn for_tier(level_count: u32, tier: ServiceTier) -> Self {
        Self::new(level_count, tier.fee())
    }

    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.insert(add_on);
        self
    }

    /// Builds inputs from raw form controls: the level-count text field,
    /// the selected tier fee and the three add-on checkboxes in canonical
    /// order.
    pub fn from_form(level_field: &str, base_service_fee: u64, checked: [bool; 3]) -> Self {
        let add_ons = AddOn::ALL
            .into_iter()
            .zip(checked)
            .filter_map(|(add_on, on)| on.then_some(add_on))
            .collect();

        Self {
            level_count: parse_level_count(level_field),
            base_service_fee,
            add_ons,
        }
    }
}

/// Parses the level-count field like a browser's `parseInt`: leading
/// whitespace, an optional sign, then the longest run of digits. `"3x"` is 3
/// and `"2.5"` is 2. No digits, zero or a negative value counts as one level.
pub fn parse_level_count(field: &str) -> u32 {
    let field = field.trim_start();
    let (negative, rest) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 1;
    }
    match digits.parse::<u32>() {
        Ok(0) => 1,
        Ok(n) => n,
        // Only a digit run too long for u32 gets here.
        Err(_) => u32::MAX,
    }
}

/// What a breakdown line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    BaseFee,
    Levels { count: u32, unit_cost: u64 },
    AddOn { add_on: AddOn },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub kind: LineKind,
    pub label: String,
    pub amount: u64,
}

/// A computed total with its itemized breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Sum of the breakdown, saturating at `u64::MAX`.
    pub total: u64,
    pub breakdown: Vec<LineItem>,
}

/// Computes the total and breakdown for the given inputs.
pub fn compute_quote(inputs: &QuoteInputs) -> Quote {
    let level_cost = u64::from(inputs.level_count).saturating_mul(LEVEL_COST);

    let mut breakdown = vec![
        LineItem {
            kind: LineKind::BaseFee,
            label: "Temel Hizmet".to_string(),
            amount: inputs.base_service_fee,
        },
        LineItem {
            kind: LineKind::Levels {
                count: inputs.level_count,
                unit_cost: LEVEL_COST,
            },
            label: format!("Seviye Geliştirme ({} × {})", inputs.level_count, LEVEL_COST),
            amount: level_cost,
        },
    ];

    // BTreeSet iterates in declaration order of AddOn.
    breakdown.extend(inputs.add_ons.iter().map(|&add_on| LineItem {
        kind: LineKind::AddOn { add_on },
        label: add_on.label().to_string(),
        amount: add_on.fee(),
    }));

    let total = breakdown
        .iter()
        .fold(0u64, |sum, item| sum.saturating_add(item.amount));
    if total == u64::MAX {
        tracing::warn!(
            base_service_fee = inputs.base_service_fee,
            "quote total saturated"
        );
    }
    Quote { total, breakdown }
}
