//! Trip subdomain: phases, plans and the traveler's taste profile.

pub mod entities;
pub mod phase;
pub mod plans;
pub mod profile;
