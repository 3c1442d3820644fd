//! # tip-core: Pure Business Logic for Tip Split
//!
//! This crate is the **heart** of Tip Split. It computes the tip on a bill
//! and what each person pays, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Split Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (terminal / web)                   │   │
//! │  │    Bill input ──► Split stepper ──► Tip slider ──► Header       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Host State (apps/terminal)                   │   │
//! │  │    bill text, split count, slider position                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ on every change                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tip-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calculator │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │  tip,      │  │ SplitCount│  │   Money   │  │ bill text │  │   │
//! │  │   │  per head  │  │ TipPct    │  │ (display) │  │  checks   │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Tip amount and total per person
//! - [`types`] - Domain types (SplitCount, TipPercentage, BillBreakdown)
//! - [`money`] - Money type for rounding derived values to cents
//! - [`error`] - Domain error types
//! - [`validation`] - Bill text and input range validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output, no hidden state
//! 2. **No I/O**: The host owns input state, logging and rendering
//! 3. **Explicit Errors**: A zero split is an error, never infinity or NaN
//!
//! ## Example Usage
//!
//! ```rust
//! use tip_core::calculator::{compute_tip_amount, compute_total_per_person};
//!
//! let tip = compute_tip_amount(100.0, 10);
//! assert_eq!(tip, 10.0);
//!
//! let per_person = compute_total_per_person(100.0, 2, 10).unwrap();
//! assert_eq!(per_person, 55.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{calculate, compute_tip_amount, compute_total_per_person};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Bills at or below this amount receive no tip.
///
/// The comparison is strict: a bill of exactly 1.0 tips nothing.
pub const MIN_TIPPABLE_BILL: f64 = 1.0;

/// Largest bill the host accepts.
///
/// Keeps the tip, the per-person total and their cent amounts finite and
/// inside `i64` at any tip percentage.
pub const MAX_BILL_AMOUNT: f64 = 1_000_000_000.0;

/// Highest tip percentage the slider can produce.
pub const MAX_TIP_PERCENTAGE: u8 = 100;

/// Slider position a fresh bill form starts at (10%).
pub const DEFAULT_SLIDER_POSITION: f32 = 0.1;
