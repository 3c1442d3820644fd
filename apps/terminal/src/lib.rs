//! # Tip Split Terminal Library
//!
//! Host layer for the bill screen: owns the input state, maps input lines to
//! commands, and renders what `tip-core` computes.
//!
//! ## Module Organization
//! ```text
//! tip_terminal_lib/
//! ├── lib.rs          ◄─── You are here (setup & session loop)
//! ├── shell.rs        ◄─── Line parsing, dispatch, rendering
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Bill form state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── bill.rs     ◄─── Bill, split and tip commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use shell::Shell;
use state::{BillForm, ConfigState, FormState};

/// Runs the terminal application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • TIPSPLIT_* environment variables over defaults                    │
/// │     • Fallback warnings held until logging is up                        │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG wins over TIPSPLIT_LOG                                   │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • FormState: Empty bill with Mutex for shared updates               │
/// │     • ConfigState: Read-only                                            │
/// │                                                                         │
/// │  4. Session Loop ─────────────────────────────────────────────────────► │
/// │     • One command per line until `quit` or end of input                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    let (config, config_warnings) = ConfigState::from_env();

    init_tracing(&config.log_filter);

    info!("Starting Tip Split terminal");
    for warning in &config_warnings {
        warn!("{}", warning);
    }

    let form = FormState::new(BillForm::from_config(&config));
    let shell = Shell::new(form, config);
    info!(config = ?shell.config(), "State initialized");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(&shell, stdin, &mut stdout).await?;

    info!("Session ended");
    Ok(())
}

/// Reads commands line by line and writes each result.
///
/// Command errors are written as `error: ...` lines and the session
/// continues; only I/O failures end it early.
pub async fn run_session<R, W>(shell: &Shell, input: R, output: &mut W) -> Result<(), ApiError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let text = match shell.handle_line(&line) {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(err) => {
                warn!(code = ?err.code, "{}", err.message);
                format!("error: {}", err.message)
            }
        };

        if !text.is_empty() {
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `TIPSPLIT_LOG=warn` - Quieter default when `RUST_LOG` is unset
/// - Default: INFO level
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Views go to stdout; keep logs out of the way
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
