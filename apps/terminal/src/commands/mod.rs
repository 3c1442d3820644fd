//! # Commands Module
//!
//! All commands exposed to the front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── bill.rs     ◄─── Bill text, split stepper, tip slider
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the form
//! fn increment_split(form: &FormState) -> BillView
//!
//! // Only needs config
//! fn get_config(config: &ConfigState) -> ConfigState
//! ```

pub mod bill;
pub mod config;
