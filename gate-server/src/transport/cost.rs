//! Cost formulas for personal and HSTC vehicles.

use std::fmt;

use serde::Serialize;

use crate::domain::ValidationError;

/// Passengers per personal vehicle.
pub const PERSONAL_CAPACITY: u64 = 4;

/// Passengers per HSTC vehicle.
pub const HSTC_CAPACITY: u64 = 5;

// Vehicle counts divide by these.
const _: () = assert!(PERSONAL_CAPACITY > 0 && HSTC_CAPACITY > 0);

/// Personal vehicle fuel cost per AU.
pub const PERSONAL_RATE_PER_AU: f64 = 0.3;

/// Personal vehicle parking cost per day.
pub const PARKING_RATE_PER_DAY: f64 = 5.0;

/// HSTC fare per AU, per vehicle.
pub const HSTC_RATE_PER_AU: f64 = 0.45;

/// A ground-transport option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransportOption {
    Personal,
    #[serde(rename = "HSTC")]
    Hstc,
}

impl TransportOption {
    /// Passenger capacity of one vehicle of this kind.
    pub fn capacity(&self) -> u64 {
        match self {
            TransportOption::Personal => PERSONAL_CAPACITY,
            TransportOption::Hstc => HSTC_CAPACITY,
        }
    }

    /// Human-readable vehicle name, e.g. "Personal Vehicle".
    pub fn vehicle_name(&self) -> &'static str {
        match self {
            TransportOption::Personal => "Personal Vehicle",
            TransportOption::Hstc => "HSTC Vehicle",
        }
    }
}

impl fmt::Display for TransportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportOption::Personal => f.write_str("Personal"),
            TransportOption::Hstc => f.write_str("HSTC"),
        }
    }
}

/// Outcome of comparing the two options for one trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportQuote {
    /// The cheaper option (HSTC on a tie).
    pub option: TransportOption,

    /// Cost of the chosen option.
    pub cost: f64,

    /// Vehicles of the chosen kind needed for the group.
    pub vehicles: u64,

    /// Cost had personal vehicles been used.
    pub personal_cost: f64,

    /// Cost had HSTC vehicles been used.
    pub hstc_cost: f64,
}

/// Number of vehicles of kind `option` needed to carry `passengers`.
fn vehicles_needed(passengers: u64, option: TransportOption) -> u64 {
    passengers.div_ceil(option.capacity())
}

fn validate_distance(distance: f64) -> Result<f64, ValidationError> {
    if !distance.is_finite() {
        return Err(ValidationError::new("distance", "must be a finite number"));
    }
    if distance < 0.0 {
        return Err(ValidationError::new("distance", "must not be negative"));
    }
    Ok(distance)
}

fn validate_parking_days(parking_days: i64) -> Result<u64, ValidationError> {
    u64::try_from(parking_days)
        .map_err(|_| ValidationError::new("parking", "must not be negative"))
}

fn validate_passengers(passengers: i64) -> Result<u64, ValidationError> {
    match u64::try_from(passengers) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::new("passengers", "must be at least 1")),
    }
}

fn personal_cost_of(distance: f64, parking_days: u64, passengers: u64) -> f64 {
    let per_vehicle = PERSONAL_RATE_PER_AU * distance + PARKING_RATE_PER_DAY * parking_days as f64;
    per_vehicle * vehicles_needed(passengers, TransportOption::Personal) as f64
}

fn hstc_cost_of(distance: f64, passengers: u64) -> f64 {
    HSTC_RATE_PER_AU * distance * vehicles_needed(passengers, TransportOption::Hstc) as f64
}

/// Cost of making the trip in personal vehicles.
///
/// `(0.3 * distance + 5 * parking_days) * ceil(passengers / 4)`
pub fn personal_cost(
    distance: f64,
    parking_days: i64,
    passengers: i64,
) -> Result<f64, ValidationError> {
    Ok(personal_cost_of(
        validate_distance(distance)?,
        validate_parking_days(parking_days)?,
        validate_passengers(passengers)?,
    ))
}

/// Cost of making the trip in HSTC vehicles.
///
/// `0.45 * distance * ceil(passengers / 5)`
pub fn hstc_cost(distance: f64, passengers: i64) -> Result<f64, ValidationError> {
    Ok(hstc_cost_of(
        validate_distance(distance)?,
        validate_passengers(passengers)?,
    ))
}

/// Price both options and choose the cheaper one.
///
/// Personal vehicles win only when strictly cheaper; equal costs choose HSTC.
pub fn compare_transport_cost(
    distance: f64,
    parking_days: i64,
    passengers: i64,
) -> Result<TransportQuote, ValidationError> {
    let distance = validate_distance(distance)?;
    let parking_days = validate_parking_days(parking_days)?;
    let passengers = validate_passengers(passengers)?;

    let personal = personal_cost_of(distance, parking_days, passengers);
    let hstc = hstc_cost_of(distance, passengers);

    let (option, cost) = if personal < hstc {
        (TransportOption::Personal, personal)
    } else {
        (TransportOption::Hstc, hstc)
    };

    Ok(TransportQuote {
        option,
        cost,
        vehicles: vehicles_needed(passengers, option),
        personal_cost: personal,
        hstc_cost: hstc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_counts() {
        use TransportOption::{Hstc, Personal};
        assert_eq!(vehicles_needed(1, Personal), 1);
        assert_eq!(vehicles_needed(4, Personal), 1);
        assert_eq!(vehicles_needed(5, Personal), 2);
        assert_eq!(vehicles_needed(5, Hstc), 1);
        assert_eq!(vehicles_needed(6, Hstc), 2);
        assert_eq!(vehicles_needed(1001, Hstc), 201);
    }

    #[test]
    fn personal_cost_formula() {
        assert_eq!(personal_cost(100.0, 3, 2).unwrap(), 45.0);
        // 5 passengers need 2 vehicles
        assert_eq!(personal_cost(100.0, 3, 5).unwrap(), 90.0);
        assert_eq!(personal_cost(0.0, 0, 1).unwrap(), 0.0);
        assert_eq!(personal_cost(0.0, 2, 4).unwrap(), 10.0);
    }

    #[test]
    fn hstc_cost_formula() {
        assert_eq!(hstc_cost(100.0, 2).unwrap(), 45.0);
        // 6 passengers need 2 vehicles
        assert_eq!(hstc_cost(100.0, 6).unwrap(), 90.0);
        assert_eq!(hstc_cost(0.0, 9).unwrap(), 0.0);
    }

    #[test]
    fn tie_chooses_hstc() {
        let quote = compare_transport_cost(100.0, 3, 2).unwrap();
        assert_eq!(quote.option, TransportOption::Hstc);
        assert_eq!(quote.cost, 45.0);
        assert_eq!(quote.personal_cost, 45.0);
        assert_eq!(quote.hstc_cost, 45.0);
        assert_eq!(quote.vehicles, 1);
    }

    #[test]
    fn personal_wins_when_strictly_cheaper() {
        // personal: 0.3*100 + 0 = 30, hstc: 45
        let quote = compare_transport_cost(100.0, 0, 3).unwrap();
        assert_eq!(quote.option, TransportOption::Personal);
        assert_eq!(quote.cost, 30.0);
        assert_eq!(quote.vehicles, 1);
    }

    #[test]
    fn hstc_wins_with_long_parking() {
        // personal: (30 + 50) * 1 = 80, hstc: 45
        let quote = compare_transport_cost(100.0, 10, 4).unwrap();
        assert_eq!(quote.option, TransportOption::Hstc);
        assert_eq!(quote.cost, 45.0);
    }

    #[test]
    fn zero_distance_ties_to_hstc() {
        let quote = compare_transport_cost(0.0, 0, 1).unwrap();
        assert_eq!(quote.option, TransportOption::Hstc);
        assert_eq!(quote.cost, 0.0);
    }

    #[test]
    fn validation_names_the_field() {
        assert_eq!(personal_cost(-1.0, 0, 1).unwrap_err().field(), "distance");
        assert_eq!(personal_cost(f64::NAN, 0, 1).unwrap_err().field(), "distance");
        assert_eq!(hstc_cost(f64::INFINITY, 1).unwrap_err().field(), "distance");
        assert_eq!(personal_cost(1.0, -1, 1).unwrap_err().field(), "parking");
        assert_eq!(personal_cost(1.0, 0, 0).unwrap_err().field(), "passengers");
        assert_eq!(hstc_cost(1.0, -3).unwrap_err().field(), "passengers");
        assert_eq!(
            compare_transport_cost(1.0, 0, 0).unwrap_err().field(),
            "passengers"
        );
    }

    #[test]
    fn quote_counts_vehicles_of_the_chosen_kind() {
        // 9 passengers: 3 personal vehicles, 2 HSTC vehicles
        let quote = compare_transport_cost(100.0, 0, 9).unwrap();
        assert_eq!(quote.option, TransportOption::Hstc);
        assert_eq!(quote.vehicles, 2);

        let quote = compare_transport_cost(100.0, 0, 8).unwrap();
        assert_eq!(quote.option, TransportOption::Personal);
        assert_eq!(quote.vehicles, 2);
    }

    #[test]
    fn option_names() {
        assert_eq!(TransportOption::Personal.to_string(), "Personal");
        assert_eq!(TransportOption::Hstc.to_string(), "HSTC");
        assert_eq!(TransportOption::Personal.vehicle_name(), "Personal Vehicle");
        assert_eq!(TransportOption::Hstc.vehicle_name(), "HSTC Vehicle");
        assert_eq!(
            serde_json::to_string(&TransportOption::Hstc).unwrap(),
            "\"HSTC\""
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The chosen option is never dearer than the alternative
        #[test]
        fn chooses_the_minimum(distance in 0.0f64..10_000.0, days in 0i64..365, passengers in 1i64..500) {
            let quote = compare_transport_cost(distance, days, passengers).unwrap();
            prop_assert_eq!(quote.cost, quote.personal_cost.min(quote.hstc_cost));
            if quote.option == TransportOption::Personal {
                prop_assert!(quote.personal_cost < quote.hstc_cost);
            }
        }

        /// Enough vehicles for everyone, and no spare vehicle
        #[test]
        fn vehicles_cover_passengers(passengers in 1u64..10_000, personal in any::<bool>()) {
            let option = if personal { TransportOption::Personal } else { TransportOption::Hstc };
            let capacity = option.capacity();
            let vehicles = vehicles_needed(passengers, option);
            prop_assert!(vehicles * capacity >= passengers);
            prop_assert!((vehicles - 1) * capacity < passengers);
        }
    }
}
