//! Service health status

use serde::{Deserialize, Serialize};

/// Health of one monitored subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthState {
    Healthy,
    Error,
    Unknown,
}

impl HealthState {
    /// Map the wire value reported by the coordinator.
    ///
    /// The coordinator reports `"healthy"`, `"error: <cause>"`, or
    /// `"unknown"`; anything unrecognized is treated as unknown.
    pub fn from_wire(value: &str) -> Self {
        if value == "healthy" {
            HealthState::Healthy
        } else if value.contains("error") {
            HealthState::Error
        } else {
            HealthState::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Healthy => "healthy",
            HealthState::Error => "error",
            HealthState::Unknown => "unknown",
        }
    }
}

/// Snapshot of the council system's health (Value Object)
///
/// Fully replaced on each successful poll; a failed poll degrades both
/// subsystems to `Error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// PC1 chairman server
    pub pc1_chairman: HealthState,
    /// PC2 council server
    pub pc2_council: HealthState,
    /// Chairman metadata (model, backend URL) when healthy
    pub chairman_meta: Option<serde_json::Value>,
    /// Council metadata (models, backend URL) when healthy
    pub council_meta: Option<serde_json::Value>,
}

impl ServiceStatus {
    /// Status reported when the poll itself fails
    pub fn degraded() -> Self {
        Self {
            pc1_chairman: HealthState::Error,
            pc2_council: HealthState::Error,
            chairman_meta: None,
            council_meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_healthy() {
        assert_eq!(HealthState::from_wire("healthy"), HealthState::Healthy);
    }

    #[test]
    fn test_from_wire_error_with_cause() {
        assert_eq!(
            HealthState::from_wire("error: connection refused"),
            HealthState::Error
        );
    }

    #[test]
    fn test_from_wire_unknown() {
        assert_eq!(HealthState::from_wire("unknown"), HealthState::Unknown);
        assert_eq!(HealthState::from_wire("starting"), HealthState::Unknown);
    }

    #[test]
    fn test_degraded_status() {
        let status = ServiceStatus::degraded();
        assert_eq!(status.pc1_chairman, HealthState::Error);
        assert_eq!(status.pc2_council, HealthState::Error);
        assert!(status.chairman_meta.is_none());
    }
}
