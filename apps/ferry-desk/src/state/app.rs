//! # Application State
//!
//! Everything a desk session holds: configuration, the traveler registry,
//! the departure time set by the admin, and whether the admin is logged in.
//! Nothing survives the process.

use tracing::info;

use ferry_core::{DepartureTime, TravelerRegistry};
use ferry_ticket::PngTicketRenderer;

use super::ConfigState;

/// State shared by all desk commands.
pub struct AppState {
    config: ConfigState,
    registry: TravelerRegistry<PngTicketRenderer>,
    departure: Option<DepartureTime>,
    admin_session: bool,
}

impl AppState {
    /// Creates an empty session with a PNG renderer.
    pub fn new(config: ConfigState) -> Self {
        let registry = TravelerRegistry::new(PngTicketRenderer::new(), config.registry_config());
        AppState {
            config,
            registry,
            departure: None,
            admin_session: false,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn registry(&self) -> &TravelerRegistry<PngTicketRenderer> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TravelerRegistry<PngTicketRenderer> {
        &mut self.registry
    }

    /// Departure time printed on tickets rendered from now on.
    pub fn departure(&self) -> Option<DepartureTime> {
        self.departure
    }

    pub fn set_departure(&mut self, time: DepartureTime) {
        info!(departure = %time, "Departure time set");
        self.departure = Some(time);
    }

    pub fn is_admin(&self) -> bool {
        self.admin_session
    }

    pub fn begin_admin_session(&mut self) {
        self.admin_session = true;
    }

    pub fn end_admin_session(&mut self) {
        self.admin_session = false;
    }
}
