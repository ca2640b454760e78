//! # Config Commands
//!
//! Retrieval of the running configuration.

use tracing::debug;

use crate::state::{AppState, ConfigState};

/// Gets the current application configuration.
///
/// The season flag reflects the live registry setting, which the admin may
/// have toggled since startup.
pub fn get_config(state: &AppState) -> ConfigState {
    debug!("get_config command");
    let mut config = state.config().clone();
    config.summer_season = state.registry().is_summer_season();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::admin_state_in;
    use crate::commands::set_summer_season;

    #[test]
    fn test_get_config_tracks_season_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = admin_state_in(dir.path());
        assert!(!get_config(&state).summer_season);

        set_summer_season(&mut state, true).unwrap();
        assert!(get_config(&state).summer_season);
    }
}
