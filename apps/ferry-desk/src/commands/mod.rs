//! # Commands Module
//!
//! Every operation the desk offers, as plain functions over [`AppState`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Desk Commands                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────┐     │
//! │  │  Traveler (traveler.rs)     │   │  Admin (admin.rs)           │     │
//! │  │                             │   │  requires a session         │     │
//! │  │  • submit_registration      │   │  • admin_login / logout     │     │
//! │  │  • view_ticket              │   │  • get_dashboard            │     │
//! │  │  • departure_banner         │   │  • mark_paid                │     │
//! │  │                             │   │  • set_departure_time       │     │
//! │  └─────────────────────────────┘   │  • search_traveler          │     │
//! │                                     │  • set_summer_season        │     │
//! │  ┌─────────────────────────────┐   │  • export_travelers         │     │
//! │  │  Config (config.rs)         │   └─────────────────────────────┘     │
//! │  │  • get_config               │                                       │
//! │  └─────────────────────────────┘                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands return `Result<T, ApiError>`; the shell prints either the
//! response or the error message.
//!
//! [`AppState`]: crate::state::AppState

pub mod admin;
pub mod config;
pub mod traveler;

pub use admin::*;
pub use config::*;
pub use traveler::*;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use crate::state::{AppState, ConfigState};

    /// Fresh state writing tickets under `dir`.
    pub fn state_in(dir: &Path) -> AppState {
        AppState::new(ConfigState {
            ticket_dir: dir.join("qr_codes"),
            ..ConfigState::default()
        })
    }

    /// Fresh state with the admin already logged in.
    pub fn admin_state_in(dir: &Path) -> AppState {
        let mut state = state_in(dir);
        state.begin_admin_session();
        state
    }
}
