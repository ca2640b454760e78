//! # Fare Calculation
//!
//! Maps (status, locality, PWD flag, season) to a fare.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  base    = tier(status)            Senior 104 · Student 116 · Child 72  │
//! │                                    Infant 0   · Regular 160             │
//! │  base    = base × 0.90             if summer season                     │
//! │  base    = base × 0.80             if PWD                               │
//! │  env fee = 0 if local else 50                                           │
//! │                                                                         │
//! │  total   = base + env fee                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no error conditions: every status has a tier.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::PassengerStatus;
use crate::{ENVIRONMENTAL_FEE, PWD_DISCOUNT_BPS, SEASON_DISCOUNT_BPS};

/// Undiscounted fare of a tier.
pub const fn base_fare(status: PassengerStatus) -> Money {
    match status {
        PassengerStatus::Senior => Money::from_whole(104),
        PassengerStatus::Student => Money::from_whole(116),
        PassengerStatus::Child => Money::from_whole(72),
        PassengerStatus::Infant => Money::zero(),
        PassengerStatus::Regular => Money::from_whole(160),
    }
}

/// Environmental fee: charged to non-locals only.
pub const fn environmental_fee(is_local: bool) -> Money {
    if is_local {
        Money::zero()
    } else {
        ENVIRONMENTAL_FEE
    }
}

/// The three figures printed on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    /// Base fare after season and PWD discounts.
    pub base: Money,
    pub environmental_fee: Money,
    pub total: Money,
}

/// Computes base, environmental fee and total.
///
/// ## Example
/// ```rust
/// use ferry_core::fare::compute_breakdown;
/// use ferry_core::types::PassengerStatus;
///
/// let fare = compute_breakdown(PassengerStatus::Student, true, true, true);
/// assert_eq!(fare.base.cents(), 8_352);
/// assert!(fare.environmental_fee.is_zero());
/// assert_eq!(fare.total.cents(), 8_352);
/// ```
pub fn compute_breakdown(
    status: PassengerStatus,
    is_local: bool,
    is_pwd: bool,
    is_summer_season: bool,
) -> FareBreakdown {
    let mut base = base_fare(status);

    if is_summer_season {
        base = base.apply_percentage_discount(SEASON_DISCOUNT_BPS);
    }

    if is_pwd {
        base = base.apply_percentage_discount(PWD_DISCOUNT_BPS);
    }

    let environmental_fee = environmental_fee(is_local);

    FareBreakdown {
        base,
        environmental_fee,
        total: base + environmental_fee,
    }
}

/// Computes the total fare only.
pub fn compute_fare(
    status: PassengerStatus,
    is_local: bool,
    is_pwd: bool,
    is_summer_season: bool,
) -> Money {
    compute_breakdown(status, is_local, is_pwd, is_summer_season).total
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_senior_non_local() {
        let fare = compute_fare(PassengerStatus::Senior, false, false, false);
        assert_eq!(fare, Money::from_cents(15_400));
    }

    #[test]
    fn test_student_local_pwd_summer() {
        let fare = compute_fare(PassengerStatus::Student, true, true, true);
        assert_eq!(fare, Money::from_cents(8_352));
    }

    #[test]
    fn test_local_infant_rides_free() {
        let fare = compute_fare(PassengerStatus::Infant, true, false, false);
        assert!(fare.is_zero());
    }

    #[test]
    fn test_non_local_infant_pays_only_fee() {
        let fare = compute_breakdown(PassengerStatus::Infant, false, true, true);
        assert!(fare.base.is_zero());
        assert_eq!(fare.total, ENVIRONMENTAL_FEE);
    }

    #[test]
    fn test_regular_tier_table() {
        let cases = [
            (false, false, 16_000),
            (true, false, 14_400),
            (false, true, 12_800),
            (true, true, 11_520),
        ];
        for (summer, pwd, expected) in cases {
            let fare = compute_breakdown(PassengerStatus::Regular, true, pwd, summer);
            assert_eq!(fare.base.cents(), expected, "summer={summer} pwd={pwd}");
        }
    }

    #[test]
    fn test_unknown_status_is_charged_regular() {
        let status = PassengerStatus::parse_or_regular("crew");
        assert_eq!(compute_fare(status, false, false, false).cents(), 21_000);
    }

    fn status_strategy() -> impl Strategy<Value = PassengerStatus> {
        prop::sample::select(PassengerStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn fare_matches_documented_formula(
            status in status_strategy(),
            is_local in any::<bool>(),
            is_pwd in any::<bool>(),
            summer in any::<bool>(),
        ) {
            // Reference in exact rational arithmetic: base × 90/100 × 80/100
            let mut numerator = base_fare(status).cents() as i128;
            let mut denominator = 1_i128;
            if summer {
                numerator *= 90;
                denominator *= 100;
            }
            if is_pwd {
                numerator *= 80;
                denominator *= 100;
            }
            prop_assert_eq!(numerator % denominator, 0, "discounted base must be exact");

            let fee = if is_local { 0 } else { 5_000 };
            let expected = (numerator / denominator) as i64 + fee;

            let fare = compute_fare(status, is_local, is_pwd, summer);
            prop_assert_eq!(fare.cents(), expected);
        }

        #[test]
        fn breakdown_total_is_sum_of_parts(
            status in status_strategy(),
            is_local in any::<bool>(),
            is_pwd in any::<bool>(),
            summer in any::<bool>(),
        ) {
            let fare = compute_breakdown(status, is_local, is_pwd, summer);
            prop_assert_eq!(fare.total, fare.base + fare.environmental_fee);
        }
    }
}
