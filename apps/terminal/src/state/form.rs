//! # Bill Form State
//!
//! Holds what the user has entered on the bill screen.
//!
//! ## Thread Safety
//! The form is wrapped in `Arc<Mutex<T>>` so any number of front-end
//! handlers can share it; each command locks, mutates and reads the view
//! under one lock.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Form Operations                                 │
//! │                                                                         │
//! │  User Action              Command                 Form Change           │
//! │  ───────────              ───────                 ───────────           │
//! │                                                                         │
//! │  Type in bill field ─────► set_bill() ──────────► bill_text = "..."    │
//! │                                                                         │
//! │  Press [+] ──────────────► increment_split() ───► split += 1           │
//! │                                                                         │
//! │  Press [-] ──────────────► decrement_split() ───► split -= 1 (min 1)   │
//! │                                                                         │
//! │  Drag tip slider ────────► set_tip() ───────────► slider = position    │
//! │                                                                         │
//! │  Every change ───────────► view() ──────────────► tip-core calculate   │
//! │                                                                         │
//! │  NOTE: Derived values are never stored. Each view recomputes them      │
//! │        from the latest bill, split and slider.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tip_core::validation::parse_bill_amount;
use tip_core::{calculate, Money, SplitCount, TipPercentage};

use super::ConfigState;

/// Raw inputs of the bill screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BillForm {
    bill_text: String,
    split: SplitCount,
    slider_position: f32,
    initial_split: SplitCount,
    initial_slider_position: f32,
}

impl BillForm {
    /// Creates an empty form starting at the given split and slider.
    pub fn new(initial_split: SplitCount, initial_slider_position: f32) -> Self {
        let initial_slider_position = clamp_slider(initial_slider_position);
        BillForm {
            bill_text: String::new(),
            split: initial_split,
            slider_position: initial_slider_position,
            initial_split,
            initial_slider_position,
        }
    }

    /// Creates an empty form from the configured defaults.
    pub fn from_config(config: &ConfigState) -> Self {
        BillForm::new(config.default_split, config.default_slider_position)
    }

    /// Replaces the bill text. Invalid text is kept as typed.
    pub fn set_bill_text(&mut self, text: impl Into<String>) {
        self.bill_text = text.into();
    }

    /// Adds one person to the split.
    pub fn increment_split(&mut self) {
        self.split = self.split.increment();
    }

    /// Removes one person from the split; a no-op at 1.
    pub fn decrement_split(&mut self) {
        self.split = self.split.decrement();
    }

    /// Sets the split directly.
    pub fn set_split(&mut self, split: SplitCount) {
        self.split = split;
    }

    /// Moves the tip slider, clamped to `[0.0, 1.0]`.
    pub fn set_slider_position(&mut self, position: f32) {
        self.slider_position = clamp_slider(position);
    }

    /// Clears the bill and restores the starting split and slider.
    pub fn reset(&mut self) {
        self.bill_text.clear();
        self.split = self.initial_split;
        self.slider_position = self.initial_slider_position;
    }

    /// The bill text as typed.
    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    /// Current split count.
    pub fn split(&self) -> SplitCount {
        self.split
    }

    /// Current slider position.
    pub fn slider_position(&self) -> f32 {
        self.slider_position
    }

    /// Tip percentage the slider currently shows.
    pub fn tip_percentage(&self) -> TipPercentage {
        TipPercentage::from_slider(self.slider_position)
    }

    /// Whether the bill text is a usable amount.
    pub fn is_valid(&self) -> bool {
        parse_bill_amount(&self.bill_text).is_ok()
    }

    /// Computes what the screen shows for the current inputs.
    pub fn view(&self) -> BillView {
        let tip = self.tip_percentage();

        match parse_bill_amount(&self.bill_text) {
            Ok(bill_amount) => {
                let breakdown = calculate(bill_amount, self.split, tip);
                BillView {
                    bill_text: self.bill_text.clone(),
                    is_valid: true,
                    split_count: self.split.get(),
                    slider_position: self.slider_position,
                    tip_percentage: tip.get(),
                    tip_amount: Some(breakdown.tip_amount),
                    tip_display: Some(breakdown.tip_money().to_string()),
                    total_per_person: Some(breakdown.total_per_person),
                    total_per_person_display: breakdown.total_per_person_money().to_string(),
                }
            }
            Err(_) => BillView {
                bill_text: self.bill_text.clone(),
                is_valid: false,
                split_count: self.split.get(),
                slider_position: self.slider_position,
                tip_percentage: tip.get(),
                tip_amount: None,
                tip_display: None,
                total_per_person: None,
                total_per_person_display: Money::zero().to_string(),
            },
        }
    }
}

fn clamp_slider(position: f32) -> f32 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

/// Snapshot of the bill screen for the front end.
///
/// While the bill text is invalid the derived amounts are `None`; only the
/// header display falls back to `$0.00`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    pub bill_text: String,
    pub is_valid: bool,
    pub split_count: u32,
    pub slider_position: f32,
    pub tip_percentage: u8,
    pub tip_amount: Option<f64>,
    pub tip_display: Option<String>,
    pub total_per_person: Option<f64>,
    pub total_per_person_display: String,
}

/// Shared bill form state.
#[derive(Debug, Clone)]
pub struct FormState {
    form: Arc<Mutex<BillForm>>,
}

impl FormState {
    /// Creates a new state around an empty form.
    pub fn new(form: BillForm) -> Self {
        FormState {
            form: Arc::new(Mutex::new(form)),
        }
    }

    /// Executes a function with read access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = form_state.with_form(|form| form.view());
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillForm) -> R,
    {
        // BillForm mutations are single assignments; a poisoned lock still holds a whole form
        let form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&form)
    }

    /// Executes a function with write access to the form.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// form_state.with_form_mut(|form| form.increment_split());
    /// ```
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(BillForm::from_config(&ConfigState::default()))
    }
}
