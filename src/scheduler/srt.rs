use super::{by_arrival, next_arrived, Policy, SimOutcome};
use crate::core::{Dispatch, PerProcessMetrics, ProcId, ProcState, Process, SimProc, Ticks};

/// Preemptive shortest remaining time, simulated one tick at a time.
/// O(total burst) rather than O(events), which is fine for integer
/// burst workloads and keeps every decision point explicit.
pub struct Srt;

impl Policy for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn run(&self, procs: &[Process]) -> SimOutcome {
        let mut pending = by_arrival(procs);
        let mut ready: Vec<SimProc> = Vec::new();
        let mut metrics = PerProcessMetrics::with_capacity(procs.len());
        let mut dispatches = Vec::new();
        let mut clock: Ticks = 0;
        let mut admitted: u64 = 0;
        let mut running: Option<ProcId> = None;
        let mut completed = 0;

        while completed < procs.len() {
            while let Some(p) = next_arrived(&mut pending, clock) {
                ready.push(SimProc::admit(p, admitted));
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

            // Re-sorted every tick; only the head can change, and
            // admission order breaks remaining-time ties.
            ready.sort_by_key(|e| (e.remaining, e.seq));

            let head_id = ready[0].proc.id;
            if running != Some(head_id) {
                if let Some(prev_id) = running {
                    // The previous holder was preempted, not completed,
                    // so it is still somewhere in the ready set.
                    if let Some(prev) = ready.iter_mut().find(|e| e.proc.id == prev_id) {
                        prev.transition(ProcState::Ready);
                    }
                }
                let head = &mut ready[0];
                head.transition(ProcState::Running);
                if !head.started {
                    head.started = true;
                    metrics.record_response(head_id, clock - head.proc.arrival);
                }
                dispatches.push(Dispatch { at: clock, id: head_id });
                running = Some(head_id);
            }

            let head = &mut ready[0];
            head.remaining -= 1;
            clock += 1;

            if head.remaining == 0 {
                let mut done = ready.remove(0);
                done.transition(ProcState::Complete);
                let turnaround = clock - done.proc.arrival;
                metrics.record_completion(done.proc.id, turnaround - done.proc.burst, turnaround);
                completed += 1;
                running = None;
            }
        }

        SimOutcome { metrics, dispatches }
    }
}
