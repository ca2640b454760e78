//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (see `cli.rs`)
//! 2. Environment variables (`FERRY_*`)
//! 3. Defaults (this file)
//!
//! The season flag is the only value that changes after startup; the admin
//! toggles it through the registry, not through this struct.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use ferry_core::{Money, RegistryConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TICKET_TITLE};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Directory that receives `traveler_<id>_ticket.png` files.
    /// Default: `qr_codes` (relative to the working directory)
    pub ticket_dir: PathBuf,

    /// First line of every ticket payload
    pub ticket_title: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Admin dashboard password. Never serialized.
    #[serde(skip_serializing, default)]
    pub admin_password: String,

    /// Summer discount in effect at startup
    pub summer_season: bool,

    /// Destinations offered on the registration form
    pub destinations: Vec<String>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Tickets: `qr_codes/`
    /// - Currency: ₱
    /// - Password: `admin1234`
    /// - Season: regular
    /// - Destinations: Tingloy, Mabini
    fn default() -> Self {
        ConfigState {
            ticket_dir: PathBuf::from("qr_codes"),
            ticket_title: DEFAULT_TICKET_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            admin_password: "admin1234".to_string(),
            summer_season: false,
            destinations: vec!["Tingloy".to_string(), "Mabini".to_string()],
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FERRY_TICKET_DIR`: Ticket image directory
    /// - `FERRY_ADMIN_PASSWORD`: Admin password
    /// - `FERRY_SUMMER_SEASON`: `true` or `1` to start in summer mode
    /// - `FERRY_TICKET_TITLE`: Ticket title line
    /// - `FERRY_CURRENCY_SYMBOL`: Currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(dir) = lookup("FERRY_TICKET_DIR").filter(|d| !d.trim().is_empty()) {
            config.ticket_dir = PathBuf::from(dir);
        }

        if let Some(password) = lookup("FERRY_ADMIN_PASSWORD").filter(|p| !p.is_empty()) {
            config.admin_password = password;
        }

        if let Some(summer) = lookup("FERRY_SUMMER_SEASON") {
            let summer = summer.trim();
            config.summer_season = summer.eq_ignore_ascii_case("true") || summer == "1";
        }

        if let Some(title) = lookup("FERRY_TICKET_TITLE").filter(|t| !t.trim().is_empty()) {
            config.ticket_title = title;
        }

        if let Some(symbol) = lookup("FERRY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Registry settings derived from this configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            ticket_dir: self.ticket_dir.clone(),
            ticket_title: self.ticket_title.clone(),
            currency_symbol: self.currency_symbol.clone(),
            summer_season: self.summer_season,
        }
    }

    /// Formats an amount with two decimals, as the dashboard shows it.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(8_352)), "₱83.52");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_amount(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config.ticket_dir, PathBuf::from("qr_codes"));
        assert_eq!(config.admin_password, "admin1234");
        assert_eq!(config.destinations, vec!["Tingloy", "Mabini"]);
        assert!(!config.summer_season);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("FERRY_TICKET_DIR", "/var/tickets"),
            ("FERRY_ADMIN_PASSWORD", "s3cret"),
            ("FERRY_SUMMER_SEASON", "1"),
            ("FERRY_TICKET_TITLE", "Island Hopper"),
        ]));
        assert_eq!(config.ticket_dir, PathBuf::from("/var/tickets"));
        assert_eq!(config.admin_password, "s3cret");
        assert!(config.summer_season);
        assert_eq!(config.ticket_title, "Island Hopper");
    }

    #[test]
    fn test_summer_flag_values() {
        for (raw, expected) in [("true", true), ("TRUE", true), ("0", false), ("no", false)] {
            let config = ConfigState::from_lookup(lookup(&[("FERRY_SUMMER_SEASON", raw)]));
            assert_eq!(config.summer_season, expected, "value {raw}");
        }
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(8_352)), "₱83.52");
        assert_eq!(config.format_currency(Money::zero()), "₱0.00");
    }

    #[test]
    fn test_password_not_serialized() {
        let json = serde_json::to_string(&ConfigState::default()).unwrap();
        assert!(!json.contains("admin1234"));
        assert!(json.contains("ticketDir"));
    }
}
