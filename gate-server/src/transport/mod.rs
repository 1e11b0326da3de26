//! Ground-transport cost comparison.
//!
//! Prices a trip of a given distance (AU) for a group of passengers, either
//! in personal vehicles (which also pay for parking) or in HSTC vehicles,
//! and picks the cheaper option.

mod cost;

pub use cost::{
    HSTC_CAPACITY, HSTC_RATE_PER_AU, PARKING_RATE_PER_DAY, PERSONAL_CAPACITY,
    PERSONAL_RATE_PER_AU, TransportOption, TransportQuote, compare_transport_cost, hstc_cost,
    personal_cost,
};
