//! # Ferry Desk Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging, to stderr)
//! 3. Load configuration (environment, then flags)
//! 4. Create the application state
//! 5. Run the interactive shell on stdin/stdout until `quit` or EOF

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match ferry_desk_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ferry-desk: {e}");
            ExitCode::FAILURE
        }
    }
}
