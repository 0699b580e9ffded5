//! HTTP adapter for the council coordinator service

pub mod gateway;
pub mod protocol;

pub use gateway::HttpCouncilGateway;
