//! Trip persistence

mod json_trips;

pub use json_trips::JsonTripRepository;
