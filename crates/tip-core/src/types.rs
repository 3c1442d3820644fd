//! # Domain Types
//!
//! Core domain types used throughout Tip Split.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   SplitCount    │   │  TipPercentage  │   │    BillBreakdown    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  u32, >= 1      │   │  u8, 0..=100    │   │  inputs echoed      │   │
//! │  │  +1 / -1 steps  │   │  from slider    │   │  tip_amount         │   │
//! │  │  floor at 1     │   │  (truncated)    │   │  total_per_person   │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bill amount itself stays a plain `f64`: the calculator accepts any
//! real value, and only the host-side text parsing rejects negatives.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_TIP_PERCENTAGE;

// =============================================================================
// Split Count
// =============================================================================

/// Number of people sharing the bill. Never below 1.
///
/// ## Stepper Behavior
/// ```text
///   [ - ]  1  [ + ]     decrement at 1 stays at 1
///   [ - ]  2  [ + ]     increment always adds 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct SplitCount(u32);

impl SplitCount {
    /// A single payer.
    pub const ONE: SplitCount = SplitCount(1);

    /// Creates a split count, or `None` for zero.
    #[inline]
    pub const fn new(count: u32) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(SplitCount(count))
        }
    }

    /// Returns the number of people.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// One more person.
    #[inline]
    pub const fn increment(self) -> Self {
        SplitCount(self.0.saturating_add(1))
    }

    /// One fewer person, stopping at 1.
    #[inline]
    pub const fn decrement(self) -> Self {
        if self.0 > 1 {
            SplitCount(self.0 - 1)
        } else {
            SplitCount::ONE
        }
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        SplitCount::ONE
    }
}

impl TryFrom<u32> for SplitCount {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        SplitCount::new(count).ok_or_else(|| ValidationError::MustBePositive {
            field: "split count".to_string(),
        })
    }
}

impl From<SplitCount> for u32 {
    fn from(split: SplitCount) -> Self {
        split.0
    }
}

/// Deserializes from a bare number, rejecting zero.
impl<'de> Deserialize<'de> for SplitCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = u32::deserialize(deserializer)?;
        SplitCount::try_from(count).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tip Percentage
// =============================================================================

/// Whole-number tip percentage in `0..=100`.
///
/// ## Slider Mapping
/// The front end exposes a continuous slider in `[0.0, 1.0]`. The position
/// is scaled by 100 and truncated toward zero:
/// ```text
///   0.0  → 0%     0.1  → 10%     0.255 → 25%     1.0 → 100%
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct TipPercentage(u8);

impl TipPercentage {
    /// No tip.
    pub const ZERO: TipPercentage = TipPercentage(0);

    /// Creates a tip percentage, or `None` above 100.
    #[inline]
    pub const fn new(percent: u8) -> Option<Self> {
        if percent > MAX_TIP_PERCENTAGE {
            None
        } else {
            Some(TipPercentage(percent))
        }
    }

    /// Derives the percentage from a slider position.
    ///
    /// Positions outside `[0.0, 1.0]` are clamped first. NaN maps to 0%.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::from_slider(0.1).get(), 10);
    /// assert_eq!(TipPercentage::from_slider(0.259).get(), 25);
    /// assert_eq!(TipPercentage::from_slider(1.7).get(), 100);
    /// ```
    pub fn from_slider(position: f32) -> Self {
        if position.is_nan() {
            return TipPercentage::ZERO;
        }
        let clamped = position.clamp(0.0, 1.0);
        // `as` truncates toward zero
        TipPercentage((clamped * 100.0) as u8)
    }

    /// Returns the percentage as a whole number.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage::from_slider(crate::DEFAULT_SLIDER_POSITION)
    }
}

impl TryFrom<u8> for TipPercentage {
    type Error = ValidationError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        TipPercentage::new(percent).ok_or_else(|| ValidationError::OutOfRange {
            field: "tip percentage".to_string(),
            min: 0,
            max: i64::from(MAX_TIP_PERCENTAGE),
        })
    }
}

impl From<TipPercentage> for u8 {
    fn from(tip: TipPercentage) -> Self {
        tip.0
    }
}

/// Deserializes from a bare number, rejecting anything above 100.
impl<'de> Deserialize<'de> for TipPercentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let percent = u8::deserialize(deserializer)?;
        TipPercentage::try_from(percent).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Bill Breakdown
// =============================================================================

/// Result of one calculation: the inputs plus both derived values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillBreakdown {
    /// Pre-tip bill amount.
    pub bill_amount: f64,

    /// Number of people paying.
    pub split_count: SplitCount,

    /// Tip as a whole percentage.
    pub tip_percentage: TipPercentage,

    /// Tip on the whole bill.
    pub tip_amount: f64,

    /// (bill + tip) / split count.
    pub total_per_person: f64,
}

impl BillBreakdown {
    /// Tip rounded to cents for display.
    #[inline]
    pub fn tip_money(&self) -> Money {
        Money::from_amount(self.tip_amount)
    }

    /// Per-person total rounded to cents for display.
    #[inline]
    pub fn total_per_person_money(&self) -> Money {
        Money::from_amount(self.total_per_person)
    }
}
