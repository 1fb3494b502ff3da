use super::{by_arrival, Policy, SimOutcome};
use crate::core::{Dispatch, PerProcessMetrics, Process, Ticks};

/// Non-preemptive, dispatch order is arrival order. The only delay a
/// process ever sees is queueing before its single dispatch, so
/// response and waiting coincide.
pub struct Fifo;

impl Policy for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn run(&self, procs: &[Process]) -> SimOutcome {
        let mut metrics = PerProcessMetrics::with_capacity(procs.len());
        let mut dispatches = Vec::with_capacity(procs.len());
        let mut clock: Ticks = 0;

        for p in by_arrival(procs) {
            let start = clock.max(p.arrival);
            let queued = start - p.arrival;
            dispatches.push(Dispatch { at: start, id: p.id });
            metrics.record_response(p.id, queued);
            clock = start + p.burst;
            metrics.record_completion(p.id, queued, clock - p.arrival);
        }

        SimOutcome { metrics, dispatches }
    }
}
