//! Worker utilization reduction.

use crate::stats::WorkerSnapshot;

/// Derived from one snapshot, overwritten every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilizationSample {
    pub busy_count: u64,
    pub total_count: u64,
    /// `busy_count / max(total_count, 1)`, always in `[0, 1]`.
    pub busy_fraction: f64,
}

impl UtilizationSample {
    /// Busy fraction scaled to an integer percentage in `[0, 100]`.
    pub fn busy_percent(&self) -> u8 {
        (self.busy_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// All workers busy.
    pub fn is_saturated(&self) -> bool {
        is_saturated(self.busy_fraction)
    }
}

/// Saturation threshold shared by samples and the readiness check.
pub fn is_saturated(busy_fraction: f64) -> bool {
    busy_fraction >= 1.0
}

/// Count busy workers. An empty snapshot yields fraction 0.
pub fn compute(snapshot: &WorkerSnapshot) -> UtilizationSample {
    let busy_count = snapshot.workers.iter().filter(|w| w.status.is_busy()).count() as u64;
    let total_count = snapshot.len() as u64;
    let busy_fraction = busy_count as f64 / total_count.max(1) as f64;

    UtilizationSample { busy_count, total_count, busy_fraction }
}
