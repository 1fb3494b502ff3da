use std::collections::VecDeque;
use std::num::NonZeroU64;

use super::{by_arrival, next_arrived, Policy, SimError, SimOutcome};
use crate::core::{Dispatch, PerProcessMetrics, ProcState, Process, SimProc, Ticks};

/// Preemptive fixed-quantum rotation. The ready queue is strict FIFO
/// and never re-sorted; when a slice ends, processes that arrived
/// during it enter the queue ahead of the preempted process.
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// A zero quantum would never make progress, so it is rejected
    /// before any simulation starts.
    pub fn new(quantum: Ticks) -> Result<Self, SimError> {
        NonZeroU64::new(quantum)
            .map(|quantum| Self { quantum })
            .ok_or(SimError::InvalidQuantum)
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum.get()
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, procs: &[Process]) -> SimOutcome {
        let mut pending = by_arrival(procs);
        let mut queue: VecDeque<SimProc> = VecDeque::new();
        let mut metrics = PerProcessMetrics::with_capacity(procs.len());
        let mut dispatches = Vec::new();
        let mut clock: Ticks = 0;
        let mut admitted: u64 = 0;
        let mut completed = 0;

        // Time-zero arrivals are ready before the first dispatch, in
        // input order.
        while let Some(p) = next_arrived(&mut pending, 0) {
            queue.push_back(SimProc::admit(p, admitted));
            admitted += 1;
        }

        while completed < procs.len() {
            if queue.is_empty() {
                match pending.front() {
                    Some(next) => clock = next.arrival,
                    None => break,
                }
                while let Some(p) = next_arrived(&mut pending, clock) {
                    queue.push_back(SimProc::admit(p, admitted));
                    admitted += 1;
                }
            }

            let Some(mut entry) = queue.pop_front() else {
                break;
            };
            entry.transition(ProcState::Running);
            if !entry.started {
                entry.started = true;
                metrics.record_response(entry.proc.id, clock - entry.proc.arrival);
            }
            dispatches.push(Dispatch {
                at: clock,
                id: entry.proc.id,
            });

            let slice = self.quantum.get().min(entry.remaining);
            entry.remaining -= slice;
            clock += slice;

            // Arrivals during the slice enqueue before the preempted
            // process returns to the tail, so they win that rotation.
            while let Some(p) = next_arrived(&mut pending, clock) {
                queue.push_back(SimProc::admit(p, admitted));
                admitted += 1;
            }

            if entry.remaining == 0 {
                entry.transition(ProcState::Complete);
                let turnaround = clock - entry.proc.arrival;
                metrics.record_completion(
                    entry.proc.id,
                    turnaround - entry.proc.burst,
                    turnaround,
                );
                completed += 1;
            } else {
                entry.transition(ProcState::Ready);
                queue.push_back(entry);
            }
        }

        SimOutcome { metrics, dispatches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::round_robin;

    #[test]
    fn single_process_finishes_across_slices() {
        let agg = round_robin(&[Process::new(1, 0, 5)], 2).unwrap();
        assert_eq!(agg.mean_response, 0.0);
        assert_eq!(agg.mean_waiting, 0.0);
        assert_eq!(agg.mean_turnaround, 5.0);
    }

    #[test]
    fn rotation_alternates_between_time_zero_arrivals() {
        // Quantum 2: P1 [0,2), P2 [2,4), P1 [4,6) done, P2 [6,7) done.
        let procs = [Process::new(1, 0, 4), Process::new(2, 0, 3)];
        let rr = RoundRobin::new(2).unwrap();
        let outcome = rr.run(&procs);
        assert_eq!(
            outcome.dispatches,
            [
                Dispatch { at: 0, id: 1 },
                Dispatch { at: 2, id: 2 },
                Dispatch { at: 4, id: 1 },
                Dispatch { at: 6, id: 2 },
            ]
        );

        assert_eq!(outcome.metrics.response(1), Some(0));
        assert_eq!(outcome.metrics.response(2), Some(2));
        assert_eq!(outcome.metrics.turnaround(1), Some(6));
        assert_eq!(outcome.metrics.turnaround(2), Some(7));
    }

    #[test]
    fn slice_arrival_enqueues_ahead_of_preempted_process() {
        // P2 arrives exactly when P1's first slice expires. It must go
        // ahead of P1 in the rotation, so the dispatch order is the
        // queue-order witness for the rule.
        let procs = [Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let rr = RoundRobin::new(2).unwrap();
        let outcome = rr.run(&procs);
        assert_eq!(
            outcome.dispatches,
            [
                Dispatch { at: 0, id: 1 },
                Dispatch { at: 2, id: 2 },
                Dispatch { at: 4, id: 1 },
            ]
        );
        assert_eq!(outcome.metrics.turnaround(2), Some(2));
        assert_eq!(outcome.metrics.turnaround(1), Some(6));
    }

    #[test]
    fn quantum_larger_than_burst_runs_to_completion() {
        let procs = [Process::new(1, 0, 3), Process::new(2, 0, 2)];
        let rr = RoundRobin::new(10).unwrap();
        let outcome = rr.run(&procs);
        assert_eq!(
            outcome.dispatches,
            [Dispatch { at: 0, id: 1 }, Dispatch { at: 3, id: 2 }]
        );
        assert_eq!(outcome.metrics.waiting(1), Some(0));
        assert_eq!(outcome.metrics.waiting(2), Some(3));
    }

    #[test]
    fn empty_queue_jump_merges_simultaneous_arrivals_in_input_order() {
        // Nothing at time 0; the clock jumps to 5 and both arrivals
        // enter the rotation in input order.
        let procs = [Process::new(1, 5, 2), Process::new(2, 5, 2)];
        let rr = RoundRobin::new(1).unwrap();
        let outcome = rr.run(&procs);
        assert_eq!(outcome.dispatches[0], Dispatch { at: 5, id: 1 });
        assert_eq!(outcome.dispatches[1], Dispatch { at: 6, id: 2 });
        assert_eq!(outcome.metrics.response(1), Some(0));
        assert_eq!(outcome.metrics.response(2), Some(1));
    }

    #[test]
    fn zero_quantum_is_rejected() {
        assert_eq!(RoundRobin::new(0).err(), Some(SimError::InvalidQuantum));
    }
}
