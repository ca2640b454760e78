//! # Departure Time
//!
//! The fastcraft departure time is a single value set by the admin in
//! 24-hour `HH:MM` form and printed on tickets in 12-hour form.
//!
//! ## Two Entry Points
//! - [`DepartureTime::from_str`]: strict, used when the admin sets the time.
//!   Distinguishes a bad format from an out-of-range hour or minute.
//! - [`format_departure`]: lenient helper for raw text. Anything that does
//!   not parse prints as `"Not Set"`.
//!
//! Tickets are rendered from the typed value through [`display_departure`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Shown on tickets when no valid departure time is known.
pub const NOT_SET: &str = "Not Set";

/// A validated time of day (hour 0-23, minute 0-59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DepartureTime {
    hour: u8,
    minute: u8,
}

impl DepartureTime {
    /// Builds a departure time, range-checking both parts.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "hour".to_string(),
                min: 0,
                max: 23,
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "minute".to_string(),
                min: 0,
                max: 59,
            });
        }
        Ok(DepartureTime { hour, minute })
    }

    /// 12-hour clock with AM/PM, e.g. `"2:05 PM"`, `"12:00 AM"`.
    ///
    /// ## Example
    /// ```rust
    /// use ferry_core::DepartureTime;
    ///
    /// let t: DepartureTime = "13:30".parse().unwrap();
    /// assert_eq!(t.to_12_hour(), "1:30 PM");
    /// ```
    pub fn to_12_hour(&self) -> String {
        let meridiem = if self.hour >= 12 { "PM" } else { "AM" };
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, self.minute, meridiem)
    }
}

/// 24-hour form, e.g. `"07:45"`.
impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for DepartureTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "departure time".to_string(),
            reason: "use HH:MM (24-hour format)".to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: i64 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: i64 = minute.trim().parse().map_err(|_| invalid())?;

        // Range errors are reported separately from format errors
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or(ValidationError::OutOfRange {
                field: "hour".to_string(),
                min: 0,
                max: 23,
            })?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m <= 59)
            .ok_or(ValidationError::OutOfRange {
                field: "minute".to_string(),
                min: 0,
                max: 59,
            })?;

        DepartureTime::new(hour, minute)
    }
}

/// Ticket wording for an optional departure time.
pub fn display_departure(time: Option<DepartureTime>) -> String {
    time.map(|t| t.to_12_hour())
        .unwrap_or_else(|| NOT_SET.to_string())
}

/// Lenient rendering of raw text: malformed or missing input is `"Not Set"`.
pub fn format_departure(raw: Option<&str>) -> String {
    display_departure(raw.and_then(|r| r.parse().ok()))
}
