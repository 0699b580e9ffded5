//! Application use cases

pub mod check_health;
pub mod submit_query;
