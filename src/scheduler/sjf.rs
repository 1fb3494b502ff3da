use super::{by_arrival, next_arrived, Policy, SimOutcome};
use crate::core::{Dispatch, PerProcessMetrics, Process, Ticks};

/// Non-preemptive shortest job first: among arrived processes, the one
/// with the smallest original burst runs to completion. Burst ties fall
/// back to ready-set admission order.
pub struct Sjf;

impl Policy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, procs: &[Process]) -> SimOutcome {
        let mut pending = by_arrival(procs);
        let mut ready: Vec<(u64, Process)> = Vec::new();
        let mut metrics = PerProcessMetrics::with_capacity(procs.len());
        let mut dispatches = Vec::with_capacity(procs.len());
        let mut clock: Ticks = 0;
        let mut admitted: u64 = 0;
        let mut completed = 0;

        while completed < procs.len() {
            while let Some(p) = next_arrived(&mut pending, clock) {
                ready.push((admitted, p));
                admitted += 1;
            }

            if ready.is_empty() {
                match pending.front() {
                    Some(next) => {
                        clock = next.arrival;
                        continue;
                    }
                    None => break,
                }
            }

            // Re-sorted before every dispatch; selection never re-inserts,
            // so admission order is a stable tie-break.
            ready.sort_by_key(|&(seq, p)| (p.burst, seq));
            let (_, p) = ready.remove(0);

            dispatches.push(Dispatch { at: clock, id: p.id });
            let queued = clock - p.arrival;
            metrics.record_response(p.id, queued);
            clock += p.burst;
            metrics.record_completion(p.id, queued, clock - p.arrival);
            completed += 1;
        }

        SimOutcome { metrics, dispatches }
    }
}
