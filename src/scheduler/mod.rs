pub mod fifo;
pub mod round_robin;
pub mod sjf;
pub mod srt;

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{aggregate, AggregateMetrics, Dispatch, PerProcessMetrics, ProcId, Process, Ticks};

pub use fifo::Fifo;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srt::Srt;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("round robin quantum must be a positive number of ticks")]
    InvalidQuantum,
    #[error("invalid process {id}: {reason}")]
    InvalidProcess { id: ProcId, reason: &'static str },
}

/// Everything one simulation run produces: the per-process metric maps
/// plus the ordered context-switch log.
#[derive(Debug, Default)]
pub struct SimOutcome {
    pub metrics: PerProcessMetrics,
    pub dispatches: Vec<Dispatch>,
}

/// A scheduling policy. `run` simulates the whole workload in one
/// synchronous pass over borrowed input; all bookkeeping is local to
/// the call, so repeated runs over the same slice are identical.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn run(&self, procs: &[Process]) -> SimOutcome;
}

pub(crate) fn validate(procs: &[Process]) -> Result<(), SimError> {
    let mut seen = FxHashSet::default();
    for p in procs {
        if p.burst == 0 {
            return Err(SimError::InvalidProcess {
                id: p.id,
                reason: "burst must be positive",
            });
        }
        if !seen.insert(p.id) {
            return Err(SimError::InvalidProcess {
                id: p.id,
                reason: "duplicate identifier",
            });
        }
    }
    Ok(())
}

// Explicitly stable arrival order: ties keep input order by pairing the
// sort key with the input index.
pub(crate) fn by_arrival(procs: &[Process]) -> VecDeque<Process> {
    let mut order: Vec<(usize, Process)> = procs.iter().copied().enumerate().collect();
    order.sort_by_key(|&(idx, p)| (p.arrival, idx));
    order.into_iter().map(|(_, p)| p).collect()
}

// Pop the next pending process that has arrived by `clock`, if any.
// Draining in a `while let` admits simultaneous arrivals in input order.
pub(crate) fn next_arrived(pending: &mut VecDeque<Process>, clock: Ticks) -> Option<Process> {
    if pending.front()?.arrival <= clock {
        pending.pop_front()
    } else {
        None
    }
}

fn run_validated(policy: &dyn Policy, procs: &[Process]) -> Result<AggregateMetrics, SimError> {
    validate(procs)?;
    Ok(aggregate(procs, &policy.run(procs).metrics))
}

pub fn fifo(procs: &[Process]) -> Result<AggregateMetrics, SimError> {
    run_validated(&Fifo, procs)
}

pub fn sjf(procs: &[Process]) -> Result<AggregateMetrics, SimError> {
    run_validated(&Sjf, procs)
}

pub fn srt(procs: &[Process]) -> Result<AggregateMetrics, SimError> {
    run_validated(&Srt, procs)
}

pub fn round_robin(procs: &[Process], quantum: Ticks) -> Result<AggregateMetrics, SimError> {
    run_validated(&RoundRobin::new(quantum)?, procs)
}
