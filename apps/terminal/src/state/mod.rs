//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────────┐            ┌──────────────────┐              │
//! │  │     FormState        │            │   ConfigState    │              │
//! │  │                      │            │                  │              │
//! │  │  Arc<Mutex<          │            │  default tip     │              │
//! │  │    BillForm          │            │  default split   │              │
//! │  │  >>                  │            │  output mode     │              │
//! │  └──────────────────────┘            └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • FormState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{ConfigState, OutputMode};
pub use form::{BillForm, BillView, FormState};
