//! # Traveler Commands
//!
//! The registration form and the ticket preview.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form fields (raw text)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RegistrationForm::validate ──── missing field ──► "Please fill in      │
//! │       │                                              all fields!"       │
//! │       ▼                                                                 │
//! │  registry.register(.., current departure time)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "QR Code Generated!"  id, fare, ticket path                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use ferry_core::departure::display_departure;
use ferry_core::validation::{validate_traveler_id, RegistrationForm};
use ferry_core::TravelerId;
use ferry_ticket::load_ticket;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation shown after a successful registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub traveler_id: TravelerId,
    pub ticket_path: String,
    /// Fare with two decimals, e.g. `₱83.52`
    pub fare: String,
    /// Departure printed on the ticket, or `Not Set`
    pub departure: String,
    /// Present when the ticket image could not be written
    pub ticket_error: Option<String>,
}

/// Registers a traveler from the form and renders the ticket.
///
/// The traveler is kept even if rendering fails; the failure comes back in
/// `ticket_error`.
pub fn submit_registration(
    state: &mut AppState,
    form: &RegistrationForm,
) -> Result<RegistrationResponse, ApiError> {
    debug!("submit_registration command");

    let valid = form.validate(&state.config().destinations)?;
    let departure = state.departure();

    let (traveler_id, path) = state.registry_mut().register(
        &valid.name,
        valid.status,
        valid.is_local,
        &valid.destination,
        valid.is_pwd,
        departure,
    );

    let snapshot = state
        .registry()
        .find(traveler_id)
        .ok_or_else(|| ApiError::internal("Registered traveler missing from registry"))?;

    info!(traveler_id, destination = %valid.destination, "Registration submitted");

    Ok(RegistrationResponse {
        traveler_id,
        ticket_path: path.display().to_string(),
        fare: state.config().format_currency(snapshot.fare()),
        departure: display_departure(departure),
        ticket_error: snapshot.ticket_error,
    })
}

/// `"Departure Time: 2:30 PM"`, shown above the registration form once the
/// admin has set a time.
pub fn departure_banner(state: &AppState) -> Option<String> {
    state
        .departure()
        .map(|time| format!("Departure Time: {}", time.to_12_hour()))
}

// =============================================================================
// Ticket Preview
// =============================================================================

/// What the desk shows for a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TicketView {
    /// The PNG decoded; its pixel size
    Image { width: u32, height: u32 },
    /// The PNG is missing or unreadable
    Placeholder { message: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketViewResponse {
    pub traveler_id: TravelerId,
    pub path: PathBuf,
    pub view: TicketView,
}

/// Loads a traveler's ticket image for display.
///
/// An unknown id is an error; an unreadable image is not, it becomes a
/// placeholder message.
pub fn view_ticket(state: &AppState, raw_id: &str) -> Result<TicketViewResponse, ApiError> {
    debug!("view_ticket command");

    let traveler_id = validate_traveler_id(raw_id)?;
    let snapshot = state
        .registry()
        .find(traveler_id)
        .ok_or_else(|| ApiError::not_found(traveler_id))?;
    let path = PathBuf::from(&snapshot.ticket_image_path);

    let view = match load_ticket(&path) {
        Ok(preview) => TicketView::Image {
            width: preview.width,
            height: preview.height,
        },
        Err(e) => TicketView::Placeholder {
            message: format!("Error loading QR: {e}"),
        },
    };

    Ok(TicketViewResponse {
        traveler_id,
        path,
        view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state_in;
    use crate::error::ErrorCode;
    use ferry_core::DepartureTime;
    use std::fs;

    fn form(name: &str, status: &str, local: &str, destination: &str, pwd: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            status: status.to_string(),
            local: local.to_string(),
            destination: destination.to_string(),
            pwd: pwd.to_string(),
        }
    }

    #[test]
    fn test_submit_registration_first_traveler() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        let response =
            submit_registration(&mut state, &form("Juan Cruz", "Student", "No", "Tingloy", "No"))
                .unwrap();

        assert_eq!(response.traveler_id, 101);
        assert_eq!(response.fare, "₱166.00");
        assert_eq!(response.departure, "Not Set");
        assert!(response.ticket_error.is_none());
        assert!(response.ticket_path.ends_with("traveler_101_ticket.png"));
        assert!(PathBuf::from(&response.ticket_path).exists());
    }

    #[test]
    fn test_submit_registration_uses_departure_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.set_departure(DepartureTime::new(14, 30).unwrap());

        let response =
            submit_registration(&mut state, &form("Ana", "senior", "yes", "mabini", "yes")).unwrap();

        assert_eq!(response.departure, "2:30 PM");
        assert_eq!(response.fare, "₱83.20");
        let snapshot = state.registry().find(101).unwrap();
        assert_eq!(snapshot.destination, "Mabini");
    }

    #[test]
    fn test_submit_registration_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        let err = submit_registration(&mut state, &form("", "Student", "No", "Tingloy", ""))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please fill in all fields!");
        assert!(state.registry().is_empty());
    }

    #[test]
    fn test_submit_registration_unknown_destination() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        let err = submit_registration(&mut state, &form("Ana", "Student", "No", "Batangas", ""))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("Tingloy"));
    }

    #[test]
    fn test_departure_banner() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        assert_eq!(departure_banner(&state), None);

        state.set_departure(DepartureTime::new(7, 5).unwrap());
        assert_eq!(
            departure_banner(&state).as_deref(),
            Some("Departure Time: 7:05 AM")
        );
    }

    #[test]
    fn test_view_ticket_loads_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        submit_registration(&mut state, &form("Ana", "Child", "Yes", "Tingloy", "")).unwrap();

        let response = view_ticket(&state, "101").unwrap();
        assert_eq!(
            response.view,
            TicketView::Image {
                width: 1080,
                height: 1920
            }
        );
    }

    #[test]
    fn test_view_ticket_placeholder_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        let response =
            submit_registration(&mut state, &form("Ana", "Child", "Yes", "Tingloy", "")).unwrap();
        fs::remove_file(&response.ticket_path).unwrap();

        let response = view_ticket(&state, "101").unwrap();
        match response.view {
            TicketView::Placeholder { message } => assert!(message.starts_with("Error loading QR:")),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_view_ticket_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());

        let err = view_ticket(&state, "999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Traveler ID 999 not found");
    }
}
