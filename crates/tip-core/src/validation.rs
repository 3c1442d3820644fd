//! # Validation Module
//!
//! Input validation for the values a front end collects.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Numeric keyboard, slider bounded to [0.0, 1.0]                    │
//! │  └── Stepper never shows a split below 1                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Host commands (Rust)                                         │
//! │  └── THIS MODULE: bill text parsing, range checks                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator                                                   │
//! │  └── Rejects a split count below 1, accepts any bill and percentage    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bill that fails validation is "not yet submitted": the host hides the
//! derived values instead of treating the bill as zero.
//!
//! ## Usage
//! ```rust
//! use tip_core::validation::{parse_bill_amount, validate_split_count};
//!
//! assert_eq!(parse_bill_amount(" 42.50 ").unwrap(), 42.5);
//! assert!(parse_bill_amount("").is_err());
//! assert_eq!(validate_split_count(3).unwrap().get(), 3);
//! ```

use crate::error::ValidationError;
use crate::types::{SplitCount, TipPercentage};
use crate::{MAX_BILL_AMOUNT, MAX_TIP_PERCENTAGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Bill Text
// =============================================================================

/// Parses the bill text a user typed.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be blank
/// - Must be a finite decimal number ("NaN" and "inf" are rejected)
/// - Must not be negative
/// - Must not exceed [`MAX_BILL_AMOUNT`]
///
/// ## Example
/// ```rust
/// use tip_core::validation::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount("100").unwrap(), 100.0);
/// assert!(parse_bill_amount("   ").is_err());
/// assert!(parse_bill_amount("12,50").is_err());
/// assert!(parse_bill_amount("-3").is_err());
/// assert!(parse_bill_amount("1e308").is_err());
/// ```
pub fn parse_bill_amount(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "bill".to_string(),
        });
    }

    let amount: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "bill".to_string(),
        reason: format!("'{}' is not a number", text),
    })?;

    if !amount.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "bill".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::Negative {
            field: "bill".to_string(),
        });
    }

    if amount > MAX_BILL_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: "bill".to_string(),
            min: 0,
            max: MAX_BILL_AMOUNT as i64,
        });
    }

    Ok(amount)
}

/// Whether the bill text counts as submitted.
#[inline]
pub fn is_bill_text_submitted(text: &str) -> bool {
    parse_bill_amount(text).is_ok()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a split count coming from outside the stepper.
///
/// ## Rules
/// - Must be at least 1
/// - Must fit in a `u32`
pub fn validate_split_count(count: i64) -> ValidationResult<SplitCount> {
    if count < 1 {
        return Err(ValidationError::MustBePositive {
            field: "split count".to_string(),
        });
    }

    u32::try_from(count)
        .ok()
        .and_then(SplitCount::new)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "split count".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        })
}

/// Validates a whole tip percentage.
///
/// ## Rules
/// - Must be between 0 and 100
pub fn validate_tip_percentage(percent: i64) -> ValidationResult<TipPercentage> {
    u8::try_from(percent)
        .ok()
        .and_then(TipPercentage::new)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "tip percentage".to_string(),
            min: 0,
            max: i64::from(MAX_TIP_PERCENTAGE),
        })
}
