//! Property-based tests for the bill calculator.

use proptest::prelude::*;
use tip_core::calculator::{calculate, compute_tip_amount, compute_total_per_person};
use tip_core::{CoreError, SplitCount, TipPercentage};

// ===== Strategy definitions =====

/// Bills that never earn a tip (at or below 1.0, negatives included)
fn untippable_bill_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-10_000.0f64..=1.0f64, Just(1.0), Just(0.0)]
}

/// Bills that do earn a tip
fn tippable_bill_strategy() -> impl Strategy<Value = f64> {
    1.000_001f64..100_000.0f64
}

fn tip_strategy() -> impl Strategy<Value = i32> {
    0i32..=100i32
}

fn split_strategy() -> impl Strategy<Value = i64> {
    1i64..=50i64
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ===== Tip amount =====

proptest! {
    /// Bills at or below the threshold tip nothing, whatever the percentage
    #[test]
    fn prop_small_bills_tip_nothing(bill in untippable_bill_strategy(), tip in any::<i32>()) {
        prop_assert_eq!(compute_tip_amount(bill, tip), 0.0);
    }

    /// Above the threshold the tip is bill * percent / 100
    #[test]
    fn prop_tip_is_percentage_of_bill(bill in tippable_bill_strategy(), tip in tip_strategy()) {
        let expected = bill * f64::from(tip) / 100.0;
        prop_assert!(close(compute_tip_amount(bill, tip), expected));
    }

    /// Tip never exceeds the bill for percentages up to 100
    #[test]
    fn prop_tip_bounded_by_bill(bill in tippable_bill_strategy(), tip in tip_strategy()) {
        let amount = compute_tip_amount(bill, tip);
        prop_assert!(amount >= 0.0);
        prop_assert!(amount <= bill || close(amount, bill));
    }
}

// ===== Total per person =====

proptest! {
    /// Per-person total is (bill + tip) / split for every valid split
    #[test]
    fn prop_total_per_person_formula(
        bill in -1_000.0f64..100_000.0f64,
        split in split_strategy(),
        tip in tip_strategy(),
    ) {
        let expected = (bill + compute_tip_amount(bill, tip)) / split as f64;
        let actual = compute_total_per_person(bill, split, tip).unwrap();
        prop_assert!(close(actual, expected));
        prop_assert!(actual.is_finite());
    }

    /// A split count of zero or less is rejected, never inf/NaN
    #[test]
    fn prop_non_positive_split_is_invalid(
        bill in -1_000.0f64..100_000.0f64,
        split in -1_000i64..=0i64,
        tip in tip_strategy(),
    ) {
        let result = compute_total_per_person(bill, split, tip);
        let is_invalid_argument = matches!(result, Err(CoreError::InvalidArgument { .. }));
        prop_assert!(is_invalid_argument);
    }

    /// Identical inputs give identical outputs
    #[test]
    fn prop_calculation_is_idempotent(
        bill in 0.0f64..100_000.0f64,
        split in 1u32..=50u32,
        slider in 0.0f32..=1.0f32,
    ) {
        let split = SplitCount::new(split).unwrap();
        let tip = TipPercentage::from_slider(slider);
        prop_assert_eq!(calculate(bill, split, tip), calculate(bill, split, tip));
    }

    /// The typed entry point agrees with the free functions
    #[test]
    fn prop_calculate_agrees_with_free_functions(
        bill in 0.0f64..100_000.0f64,
        split in 1u32..=50u32,
        slider in 0.0f32..=1.0f32,
    ) {
        let split_count = SplitCount::new(split).unwrap();
        let tip = TipPercentage::from_slider(slider);
        let breakdown = calculate(bill, split_count, tip);

        let tip_percentage = i32::from(tip.get());
        prop_assert_eq!(breakdown.tip_amount, compute_tip_amount(bill, tip_percentage));
        prop_assert_eq!(
            breakdown.total_per_person,
            compute_total_per_person(bill, i64::from(split), tip_percentage).unwrap()
        );
    }
}

// ===== Slider mapping =====

proptest! {
    /// Any slider position maps into 0..=100
    #[test]
    fn prop_slider_maps_into_range(position in any::<f32>()) {
        prop_assert!(TipPercentage::from_slider(position).get() <= 100);
    }

    /// Moving the slider right never lowers the percentage
    #[test]
    fn prop_slider_is_monotonic(a in 0.0f32..=1.0f32, b in 0.0f32..=1.0f32) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(TipPercentage::from_slider(low) <= TipPercentage::from_slider(high));
    }
}

// ===== Split stepper =====

proptest! {
    /// Decrementing never drops below one, however many presses
    #[test]
    fn prop_split_never_below_one(start in 1u32..=20u32, presses in 0usize..50usize) {
        let mut split = SplitCount::new(start).unwrap();
        for _ in 0..presses {
            split = split.decrement();
        }
        prop_assert!(split.get() >= 1);
        prop_assert_eq!(split.get(), start.saturating_sub(presses as u32).max(1));
    }
}
