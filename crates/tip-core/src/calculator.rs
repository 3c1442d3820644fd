//! # Bill Calculator
//!
//! Tip amount and per-person total for a shared bill.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   bill_amount ──┬──► compute_tip_amount ──► tip_amount                 │
//! │   tip_percent ──┘         │                     │                       │
//! │                           │  bill <= 1?         │                       │
//! │                           └──► 0.0              ▼                       │
//! │                                       (bill + tip) / split_count        │
//! │   split_count ─────────────────────────────────►│                       │
//! │                                                 ▼                       │
//! │                                          total_per_person               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure. Hosts call them again on every input change
//! with the latest values; nothing is cached between calls.

use crate::error::{CoreError, CoreResult};
use crate::types::{BillBreakdown, SplitCount, TipPercentage};
use crate::MIN_TIPPABLE_BILL;

/// Computes the tip on a bill.
///
/// Bills at or below [`MIN_TIPPABLE_BILL`] tip nothing, whatever the
/// percentage. The percentage is not range-checked.
///
/// ## Example
/// ```rust
/// use tip_core::calculator::compute_tip_amount;
///
/// assert_eq!(compute_tip_amount(100.0, 10), 10.0);
/// assert_eq!(compute_tip_amount(1.0, 50), 0.0);
/// assert_eq!(compute_tip_amount(0.5, 50), 0.0);
/// ```
pub fn compute_tip_amount(bill_amount: f64, tip_percentage: i32) -> f64 {
    if bill_amount > MIN_TIPPABLE_BILL {
        (bill_amount * f64::from(tip_percentage)) / 100.0
    } else {
        0.0
    }
}

/// Computes what each person pays: `(bill + tip) / split_count`.
///
/// ## Errors
/// [`CoreError::InvalidArgument`] when `split_count` is zero or negative.
///
/// ## Example
/// ```rust
/// use tip_core::calculator::compute_total_per_person;
///
/// assert_eq!(compute_total_per_person(50.0, 3, 20).unwrap(), 20.0);
/// assert!(compute_total_per_person(50.0, 0, 20).is_err());
/// ```
pub fn compute_total_per_person(
    bill_amount: f64,
    split_count: i64,
    tip_percentage: i32,
) -> CoreResult<f64> {
    if split_count <= 0 {
        return Err(CoreError::invalid_argument(
            "split_count",
            format!("must be at least 1, got {}", split_count),
        ));
    }

    let total = compute_tip_amount(bill_amount, tip_percentage) + bill_amount;
    Ok(total / split_count as f64)
}

/// Runs both calculations on already-validated inputs.
///
/// Cannot fail: a [`SplitCount`] is never below 1.
pub fn calculate(bill_amount: f64, split: SplitCount, tip: TipPercentage) -> BillBreakdown {
    let tip_percentage = i32::from(tip.get());
    let tip_amount = compute_tip_amount(bill_amount, tip_percentage);

    BillBreakdown {
        bill_amount,
        split_count: split,
        tip_percentage: tip,
        tip_amount,
        total_per_person: (tip_amount + bill_amount) / f64::from(split.get()),
    }
}
