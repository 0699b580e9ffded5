//! Port definitions (interfaces to the outside world)

pub mod council_gateway;
pub mod progress;
pub mod state_store;
