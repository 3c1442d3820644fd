//! # Tip Split Terminal Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Split Terminal                               │
//! │                                                                         │
//! │  stdin ──► shell.rs ──► commands/ ──► state/ ──► tip-core               │
//! │                │                                                        │
//! │  stdout ◄──────┘ (rendered view)        stderr ◄── tracing              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging to stderr)
//! 3. Create state objects (FormState, ConfigState)
//! 4. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match tip_terminal_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
