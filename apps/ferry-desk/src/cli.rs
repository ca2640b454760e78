//! # Command-Line Flags
//!
//! Flags override the `FERRY_*` environment variables.

use clap::Parser;
use std::path::PathBuf;

use crate::state::ConfigState;

#[derive(Debug, Clone, Parser)]
#[command(name = "ferry-desk")]
#[command(about = "Ferry e-ticket desk: register travelers, issue QR tickets, confirm payments")]
pub struct Cli {
    /// Directory for ticket images
    #[arg(long)]
    pub ticket_dir: Option<PathBuf>,

    /// Start in summer mode (10% off base fares)
    #[arg(long)]
    pub summer: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies flags on top of a loaded configuration.
    pub fn apply(&self, config: &mut ConfigState) {
        if let Some(dir) = &self.ticket_dir {
            config.ticket_dir = dir.clone();
        }
        if self.summer {
            config.summer_season = true;
        }
    }
}
