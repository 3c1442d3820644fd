//! # Bill Commands
//!
//! Commands for editing the bill form.
//!
//! ## Screen Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Screen Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐  set_bill(valid)  ┌──────────┐                           │
//! │  │  Empty   │──────────────────►│ Showing  │◄──┐ increment_split       │
//! │  │  (header │                   │ tip and  │   │ decrement_split       │
//! │  │  only)   │◄──────────────────│ split    │───┘ set_tip               │
//! │  └──────────┘ set_bill(invalid) └──────────┘                           │
//! │       ▲                              │                                  │
//! │       └──────────── reset_bill ──────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the freshly computed view, so the front end never
//! renders stale derived values.

use tip_core::validation::validate_split_count;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BillView, FormState};

/// Gets the current screen without changing anything.
pub fn get_bill(form: &FormState) -> BillView {
    debug!("get_bill command");
    form.with_form(|f| f.view())
}

/// Replaces the bill text.
///
/// Blank or non-numeric text is accepted and stored; the returned view
/// simply has no derived values until the text becomes a valid amount.
pub fn set_bill(form: &FormState, text: &str) -> BillView {
    debug!(text, "set_bill command");
    form.with_form_mut(|f| {
        f.set_bill_text(text);
        f.view()
    })
}

/// Adds one person to the split.
pub fn increment_split(form: &FormState) -> BillView {
    debug!("increment_split command");
    form.with_form_mut(|f| {
        f.increment_split();
        f.view()
    })
}

/// Removes one person from the split; stays at 1.
pub fn decrement_split(form: &FormState) -> BillView {
    debug!("decrement_split command");
    form.with_form_mut(|f| {
        f.decrement_split();
        f.view()
    })
}

/// Sets the split to an exact count.
///
/// ## Errors
/// Validation error for counts below 1 or beyond `u32`.
pub fn set_split(form: &FormState, count: i64) -> Result<BillView, ApiError> {
    debug!(count, "set_split command");
    let split = validate_split_count(count)?;
    Ok(form.with_form_mut(|f| {
        f.set_split(split);
        f.view()
    }))
}

/// Moves the tip slider.
///
/// Positions outside `[0.0, 1.0]` are clamped, like a dragged slider.
///
/// ## Errors
/// Validation error for NaN or infinite positions.
pub fn set_tip(form: &FormState, position: f32) -> Result<BillView, ApiError> {
    debug!(position, "set_tip command");
    if !position.is_finite() {
        return Err(ApiError::validation("tip position must be a number between 0 and 1"));
    }
    Ok(form.with_form_mut(|f| {
        f.set_slider_position(position);
        f.view()
    }))
}

/// Clears the bill and restores the starting split and tip.
pub fn reset_bill(form: &FormState) -> BillView {
    debug!("reset_bill command");
    form.with_form_mut(|f| {
        f.reset();
        f.view()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_walkthrough_matches_screen() {
        let form = FormState::default();

        let view = set_bill(&form, "100");
        assert_eq!(view.tip_amount, Some(10.0));
        assert_eq!(view.total_per_person, Some(100.0 + 10.0));

        let view = increment_split(&form);
        assert_eq!(view.split_count, 2);
        assert_eq!(view.total_per_person, Some(55.0));

        let view = set_tip(&form, 0.2).unwrap();
        assert_eq!(view.tip_percentage, 20);
        assert_eq!(view.tip_amount, Some(20.0));
        assert_eq!(view.total_per_person, Some(60.0));

        let view = decrement_split(&form);
        let view_again = get_bill(&form);
        assert_eq!(view, view_again);
        assert_eq!(view.total_per_person, Some(120.0));
    }

    #[test]
    fn test_decrement_at_one_is_noop() {
        let form = FormState::default();
        set_bill(&form, "30");
        let view = decrement_split(&form);
        assert_eq!(view.split_count, 1);
        assert_eq!(view.total_per_person, Some(33.0));
    }

    #[test]
    fn test_set_split_validates() {
        let form = FormState::default();
        set_bill(&form, "200");
        set_tip(&form, 0.0).unwrap();

        let view = set_split(&form, 4).unwrap();
        assert_eq!(view.total_per_person, Some(50.0));

        let err = set_split(&form, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_bill(&form).split_count, 4);
    }

    #[test]
    fn test_set_tip_rejects_nan() {
        let form = FormState::default();
        let err = set_tip(&form, f32::NAN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_bill(&form).tip_percentage, 10);
    }

    #[test]
    fn test_set_tip_clamps() {
        let form = FormState::default();
        assert_eq!(set_tip(&form, 4.0).unwrap().tip_percentage, 100);
    }

    #[test]
    fn test_reset_clears_bill() {
        let form = FormState::default();
        set_bill(&form, "64");
        increment_split(&form);
        let view = reset_bill(&form);
        assert!(!view.is_valid);
        assert_eq!(view.bill_text, "");
        assert_eq!(view.split_count, 1);
    }
}
