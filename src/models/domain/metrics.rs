use std::time::Duration;

use chrono::{DateTime, Utc};

/// Wall-clock timing for one generation call, measured around the call
/// boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationMetrics {
    pub elapsed: Duration,
    pub completed_at: DateTime<Utc>,
}

impl GenerationMetrics {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Two-decimal seconds, the way the client displays generation time.
    pub fn display_seconds(&self) -> String {
        format!("{:.2}", self.seconds())
    }
}
