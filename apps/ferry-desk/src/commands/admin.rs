//! # Admin Commands
//!
//! Everything behind the admin password.
//!
//! ## Session
//! ```text
//! ┌──────────┐  admin_login(pw)   ┌──────────┐
//! │ Logged   │ ─────────────────► │ Logged   │ ── get_dashboard, mark_paid,
//! │ out      │ ◄───────────────── │ in       │    set_departure_time, ...
//! └──────────┘    admin_logout    └──────────┘
//! ```
//!
//! Every command other than login fails with `UNAUTHORIZED` while logged out.

use serde::Serialize;
use tracing::{debug, info, warn};

use ferry_core::departure::display_departure;
use ferry_core::ticket::yes_no;
use ferry_core::validation::validate_traveler_id;
use ferry_core::{DepartureTime, TravelerSnapshot, ValidationError};

use crate::error::{ApiError, ErrorCode};
use crate::state::{AppState, ConfigState};

fn require_admin(state: &AppState) -> Result<(), ApiError> {
    if state.is_admin() {
        Ok(())
    } else {
        Err(ApiError::unauthorized("Admin login required"))
    }
}

// =============================================================================
// Session
// =============================================================================

/// Opens an admin session if the password matches.
pub fn admin_login(state: &mut AppState, password: &str) -> Result<(), ApiError> {
    debug!("admin_login command");

    if password != state.config().admin_password {
        warn!("Admin login failed");
        return Err(ApiError::unauthorized("❌ Incorrect password!"));
    }

    state.begin_admin_session();
    info!("Admin logged in");
    Ok(())
}

pub fn admin_logout(state: &mut AppState) {
    debug!("admin_logout command");
    state.end_admin_session();
}

// =============================================================================
// Dashboard
// =============================================================================

/// One dashboard table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub local: String,
    pub pwd: String,
    pub destination: String,
    pub fare: String,
    pub paid: String,
}

impl TravelerRow {
    pub fn new(traveler: &TravelerSnapshot, config: &ConfigState) -> Self {
        TravelerRow {
            id: traveler.id.to_string(),
            name: traveler.name.clone(),
            status: traveler.status.label().to_string(),
            local: yes_no(traveler.is_local).to_string(),
            pwd: yes_no(traveler.is_pwd).to_string(),
            destination: traveler.destination.clone(),
            fare: config.format_currency(traveler.fare()),
            paid: traveler.payment_status().table_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Rows in registration order
    pub rows: Vec<TravelerRow>,
    pub total_passengers: usize,
    pub paid_count: usize,
    pub total_fares: String,
    pub departure: String,
    pub summer_season: bool,
}

/// Lists every traveler with session totals.
pub fn get_dashboard(state: &AppState) -> Result<DashboardResponse, ApiError> {
    debug!("get_dashboard command");
    require_admin(state)?;

    let registry = state.registry();
    let rows = registry
        .list_all()
        .iter()
        .map(|t| TravelerRow::new(t, state.config()))
        .collect();

    Ok(DashboardResponse {
        rows,
        total_passengers: registry.len(),
        paid_count: registry.paid_count(),
        total_fares: state.config().format_currency(registry.total_fares()),
        departure: display_departure(state.departure()),
        summer_season: registry.is_summer_season(),
    })
}

// =============================================================================
// Payment
// =============================================================================

/// Marks a traveler as paid and re-renders the ticket with `✓ PAID`.
pub fn mark_paid(state: &mut AppState, raw_id: &str) -> Result<TravelerRow, ApiError> {
    debug!("mark_paid command");
    require_admin(state)?;

    let traveler_id = validate_traveler_id(raw_id)?;
    let departure = state.departure();

    if !state.registry_mut().mark_paid(traveler_id, departure) {
        return Err(ApiError::not_found(traveler_id));
    }

    let snapshot = state
        .registry()
        .find(traveler_id)
        .ok_or_else(|| ApiError::not_found(traveler_id))?;

    if let Some(error) = &snapshot.ticket_error {
        warn!(traveler_id, %error, "Paid ticket could not be rendered");
    }

    Ok(TravelerRow::new(&snapshot, state.config()))
}

// =============================================================================
// Departure Time
// =============================================================================

/// Sets the departure time used on tickets rendered from now on.
///
/// ## Errors
/// - Blank input: `Please enter a departure time`
/// - Hour or minute out of range: `Invalid time! ...`
/// - Anything that is not `HH:MM`: `Invalid format! ...`
///
/// ## Returns
/// `"Departure: 2:30 PM"`
pub fn set_departure_time(state: &mut AppState, raw: &str) -> Result<String, ApiError> {
    debug!("set_departure_time command");
    require_admin(state)?;

    if raw.trim().is_empty() {
        return Err(ApiError::validation("Please enter a departure time"));
    }

    let time: DepartureTime = raw.parse().map_err(|e| match e {
        ValidationError::OutOfRange { .. } => {
            ApiError::validation("Invalid time! Use HH:MM format (00-23:00-59)")
        }
        _ => ApiError::validation("Invalid format! Use HH:MM (24-hour format)"),
    })?;

    state.set_departure(time);
    Ok(format!("Departure: {}", time.to_12_hour()))
}

// =============================================================================
// Search
// =============================================================================

/// Looks up one traveler by id.
pub fn search_traveler(state: &AppState, raw_id: &str) -> Result<TravelerRow, ApiError> {
    debug!("search_traveler command");
    require_admin(state)?;

    if raw_id.trim().is_empty() {
        return Err(ApiError::validation("Please enter a Traveler ID"));
    }

    // A non-numeric id can never match
    let not_found = || {
        ApiError::new(
            ErrorCode::NotFound,
            format!("Traveler ID {} not found", raw_id.trim()),
        )
    };
    let traveler_id = validate_traveler_id(raw_id).map_err(|_| not_found())?;
    let snapshot = state.registry().find(traveler_id).ok_or_else(not_found)?;

    Ok(TravelerRow::new(&snapshot, state.config()))
}

// =============================================================================
// Season
// =============================================================================

/// Switches summer pricing for new registrations. Existing fares keep the
/// season they were registered under.
pub fn set_summer_season(state: &mut AppState, enabled: bool) -> Result<bool, ApiError> {
    debug!("set_summer_season command");
    require_admin(state)?;

    state.registry_mut().set_summer_season(enabled);
    Ok(enabled)
}

// =============================================================================
// Export
// =============================================================================

/// All travelers as pretty-printed JSON.
pub fn export_travelers(state: &AppState) -> Result<String, ApiError> {
    debug!("export_travelers command");
    require_admin(state)?;

    let travelers = state.registry().list_all();
    serde_json::to_string_pretty(&travelers).map_err(|e| {
        tracing::error!("Export failed: {}", e);
        ApiError::internal("Export failed")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit_registration;
    use crate::commands::test_support::{admin_state_in, state_in};
    use ferry_core::validation::RegistrationForm;

    fn register(state: &mut AppState, name: &str, status: &str, local: &str, pwd: &str) {
        let form = RegistrationForm {
            name: name.to_string(),
            status: status.to_string(),
            local: local.to_string(),
            destination: "Tingloy".to_string(),
            pwd: pwd.to_string(),
        };
        submit_registration(state, &form).unwrap();
    }

    #[test]
    fn test_login_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        let err = admin_login(&mut state, "guess").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(err.message, "❌ Incorrect password!");
        assert!(!state.is_admin());
    }

    #[test]
    fn test_login_logout() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        admin_login(&mut state, "admin1234").unwrap();
        assert!(get_dashboard(&state).is_ok());

        admin_logout(&mut state);
        let err = get_dashboard(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_commands_require_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        assert!(mark_paid(&mut state, "101").is_err());
        assert!(set_departure_time(&mut state, "08:00").is_err());
        assert!(search_traveler(&state, "101").is_err());
        assert!(set_summer_season(&mut state, true).is_err());
        assert!(export_travelers(&state).is_err());
        assert!(state.departure().is_none());
        assert!(!state.registry().is_summer_season());
    }

    #[test]
    fn test_dashboard_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        register(&mut state, "Ana", "Senior", "Yes", "Yes");
        register(&mut state, "Ben", "Regular", "No", "");

        let dashboard = get_dashboard(&state).unwrap();
        assert_eq!(dashboard.total_passengers, 2);
        assert_eq!(dashboard.paid_count, 0);
        assert_eq!(dashboard.total_fares, "₱293.20");
        assert_eq!(dashboard.departure, "Not Set");
        assert_eq!(
            dashboard.rows[0],
            TravelerRow {
                id: "101".to_string(),
                name: "Ana".to_string(),
                status: "Senior".to_string(),
                local: "Yes".to_string(),
                pwd: "Yes".to_string(),
                destination: "Tingloy".to_string(),
                fare: "₱83.20".to_string(),
                paid: "Not Paid".to_string(),
            }
        );
        assert_eq!(dashboard.rows[1].id, "102");
    }

    #[test]
    fn test_mark_paid() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        register(&mut state, "Ana", "Child", "Yes", "");

        let row = mark_paid(&mut state, "101").unwrap();
        assert_eq!(row.paid, "✓ Paid");
        assert_eq!(row.fare, "₱72.00");
        assert_eq!(get_dashboard(&state).unwrap().paid_count, 1);
    }

    #[test]
    fn test_mark_paid_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());

        let err = mark_paid(&mut state, "500").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Traveler ID 500 not found");
    }

    #[test]
    fn test_set_departure_time() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());

        assert_eq!(
            set_departure_time(&mut state, "14:30").unwrap(),
            "Departure: 2:30 PM"
        );
        assert_eq!(state.departure(), Some(DepartureTime::new(14, 30).unwrap()));
    }

    #[test]
    fn test_set_departure_time_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());

        let err = set_departure_time(&mut state, "25:00").unwrap_err();
        assert_eq!(err.message, "Invalid time! Use HH:MM format (00-23:00-59)");

        let err = set_departure_time(&mut state, "noon").unwrap_err();
        assert_eq!(err.message, "Invalid format! Use HH:MM (24-hour format)");

        let err = set_departure_time(&mut state, "  ").unwrap_err();
        assert_eq!(err.message, "Please enter a departure time");

        assert!(state.departure().is_none());
    }

    #[test]
    fn test_search_traveler() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        register(&mut state, "Ana", "Student", "No", "");

        assert_eq!(search_traveler(&state, " 101 ").unwrap().name, "Ana");
        assert_eq!(
            search_traveler(&state, "abc").unwrap_err().message,
            "Traveler ID abc not found"
        );
        assert_eq!(
            search_traveler(&state, "").unwrap_err().message,
            "Please enter a Traveler ID"
        );
    }

    #[test]
    fn test_season_toggle_only_affects_new_registrations() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        register(&mut state, "Ana", "Regular", "Yes", "");

        set_summer_season(&mut state, true).unwrap();
        register(&mut state, "Ben", "Regular", "Yes", "");

        let dashboard = get_dashboard(&state).unwrap();
        assert_eq!(dashboard.rows[0].fare, "₱160.00");
        assert_eq!(dashboard.rows[1].fare, "₱144.00");
        assert!(dashboard.summer_season);
    }

    #[test]
    fn test_export_travelers() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        register(&mut state, "Ana", "Infant", "Yes", "");

        let json = export_travelers(&state).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], 101);
        assert_eq!(parsed[0]["fareCents"], 0);
        assert_eq!(parsed[0]["status"], "infant");
    }
}
