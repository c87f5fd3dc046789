use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Scoped timer emitting trace spans around simulation phases.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("begin {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when a simulation step exceeded the caller's frame budget.
pub fn warn_if_step_budget_exceeded(elapsed: Duration, budget_ms: f32) {
    let elapsed_ms = elapsed.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("step exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
    }
}
