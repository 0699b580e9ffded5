//! Stage timing value object and elapsed-time formatting

use serde::{Deserialize, Serialize};

/// Wall-clock durations for a run, in milliseconds (Value Object)
///
/// Each field is set by the orchestrator when the corresponding stage
/// completes. All four fields are populated only for a completed run;
/// a failed run keeps the durations of the stages that finished.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunTimings {
    pub stage1_ms: Option<u64>,
    pub stage2_ms: Option<u64>,
    pub stage3_ms: Option<u64>,
    pub total_ms: Option<u64>,
}

impl RunTimings {
    /// True once every stage and the total have been recorded
    pub fn is_complete(&self) -> bool {
        self.stage1_ms.is_some()
            && self.stage2_ms.is_some()
            && self.stage3_ms.is_some()
            && self.total_ms.is_some()
    }
}

/// Format an elapsed duration for display.
///
/// Durations under one second render as whole milliseconds (`"999ms"`),
/// everything else as seconds with one decimal place (`"1.5s"`).
pub fn format_elapsed(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sub_second() {
        assert_eq!(format_elapsed(0), "0ms");
        assert_eq!(format_elapsed(999), "999ms");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_elapsed(1000), "1.0s");
        assert_eq!(format_elapsed(1500), "1.5s");
        assert_eq!(format_elapsed(61_230), "61.2s");
    }

    #[test]
    fn test_is_complete() {
        let mut timings = RunTimings::default();
        assert!(!timings.is_complete());

        timings.stage1_ms = Some(10);
        timings.stage2_ms = Some(20);
        timings.stage3_ms = Some(30);
        assert!(!timings.is_complete());

        timings.total_ms = Some(60);
        assert!(timings.is_complete());
    }
}
