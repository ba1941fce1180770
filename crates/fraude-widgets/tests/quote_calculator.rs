//! Quote calculator contract.

use proptest::prelude::*;

use fraude_widgets::{compute_quote, AddOn, LineKind, QuoteInputs, ServiceTier, LEVEL_COST};

fn amounts(inputs: &QuoteInputs) -> Vec<u64> {
    compute_quote(inputs)
        .breakdown
        .iter()
        .map(|item| item.amount)
        .collect()
}

#[test]
fn two_levels_with_audio() {
    let inputs = QuoteInputs::new(2, 5000).with_add_on(AddOn::AudioDesign);
    let quote = compute_quote(&inputs);

    assert_eq!(quote.total, 26_000);
    assert_eq!(amounts(&inputs), vec![5000, 6000, 15_000]);
    assert_eq!(
        quote.breakdown[2].kind,
        LineKind::AddOn {
            add_on: AddOn::AudioDesign
        }
    );
}

#[test]
fn single_level_no_base_fee() {
    let inputs = QuoteInputs::new(1, 0);
    let quote = compute_quote(&inputs);

    assert_eq!(quote.total, 3000);
    assert_eq!(amounts(&inputs), vec![0, 3000]);
}

#[test]
fn malformed_form_field_counts_as_one_level() {
    let inputs = QuoteInputs::from_form("on iki", ServiceTier::Standard.fee(), [false; 3]);
    assert_eq!(compute_quote(&inputs).total, 5000 + LEVEL_COST);
}

#[test]
fn form_field_with_trailing_text_keeps_leading_number() {
    let inputs = QuoteInputs::from_form("3 bölüm", 0, [false; 3]);
    assert_eq!(compute_quote(&inputs).total, 3 * LEVEL_COST);

    let inputs = QuoteInputs::from_form("2.5", 0, [false; 3]);
    assert_eq!(compute_quote(&inputs).total, 2 * LEVEL_COST);
}

fn add_on_set() -> impl Strategy<Value = Vec<AddOn>> {
    prop::sample::subsequence(AddOn::ALL.to_vec(), 0..=3)
}

proptest! {
    /// Total is always the sum of the breakdown and of its parts.
    #[test]
    fn total_is_sum_of_parts(
        levels in 1u32..500,
        tier in prop::sample::select(ServiceTier::ALL.to_vec()),
        add_ons in add_on_set(),
    ) {
        let mut inputs = QuoteInputs::for_tier(levels, tier);
        for add_on in &add_ons {
            inputs = inputs.with_add_on(*add_on);
        }
        let quote = compute_quote(&inputs);

        let expected = tier.fee()
            + u64::from(levels) * LEVEL_COST
            + add_ons.iter().map(|a| a.fee()).sum::<u64>();
        prop_assert_eq!(quote.total, expected);
        prop_assert_eq!(quote.breakdown.iter().map(|i| i.amount).sum::<u64>(), quote.total);
        prop_assert_eq!(quote.breakdown.len(), 2 + add_ons.len());
    }

    /// The order add-ons are ticked in never changes the breakdown.
    #[test]
    fn add_on_order_is_canonical(mut add_ons in add_on_set(), levels in 1u32..50) {
        let forward = add_ons
            .iter()
            .fold(QuoteInputs::new(levels, 0), |inputs, a| inputs.with_add_on(*a));
        add_ons.reverse();
        let backward = add_ons
            .iter()
            .fold(QuoteInputs::new(levels, 0), |inputs, a| inputs.with_add_on(*a));

        prop_assert_eq!(compute_quote(&forward), compute_quote(&backward));
    }

    /// Any base fee is accepted and the total never wraps around.
    #[test]
    fn total_never_wraps(fee in any::<u64>(), levels in 1u32..1000) {
        let inputs = QuoteInputs::new(levels, fee).with_add_on(AddOn::PlaytestOptimization);
        let quote = compute_quote(&inputs);

        prop_assert!(quote.total >= fee);
        prop_assert_eq!(
            quote.total,
            fee.saturating_add(u64::from(levels) * LEVEL_COST + AddOn::PlaytestOptimization.fee())
        );
    }
}
