//! # Ferry Desk Library
//!
//! Core library for the ferry e-ticket desk. Configures and runs the
//! interactive shell.
//!
//! ## Module Organization
//! ```text
//! ferry_desk_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── shell.rs        ◄─── Line-oriented front end
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── AppState (registry, departure, session)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── traveler.rs ◄─── Registration form and ticket preview
//! │   ├── admin.rs    ◄─── Login, dashboard, payment, departure time
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State
//! There are no globals. One [`state::AppState`] is created at startup and
//! handed by `&mut` to every command; the shell is the only caller, so no
//! locking is needed.

pub mod cli;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use shell::Shell;
use state::{AppState, ConfigState};

/// Runs the desk on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Flags ──────────────────────────────────────────────────────► │
/// │     • --ticket-dir, --summer, --verbose                                 │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN (INFO for ferry crates), RUST_LOG overrides         │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • FERRY_* environment variables, then flags                         │
/// │                                                                         │
/// │  4. Initialize State ─────────────────────────────────────────────────► │
/// │     • Empty registry, no departure time, admin logged out               │
/// │                                                                         │
/// │  5. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Until `quit` or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = ConfigState::from_env();
    cli.apply(&mut config);

    info!(
        ticket_dir = %config.ticket_dir.display(),
        summer = config.summer_season,
        "Starting ferry desk"
    );

    let state = AppState::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), state).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ferry_core=trace` - Show trace for the core crate only
/// - `--verbose` - Debug for all ferry crates
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,ferry=debug"
    } else {
        "warn,ferry=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
