use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use super::state::{ProcId, Process, Ticks};

/// Per-process tick counts, filled in as the simulation progresses:
/// response at first dispatch, waiting and turnaround at completion.
/// After a scheduler run, every input id has exactly one entry in each
/// map.
#[derive(Debug, Default, Clone)]
pub struct PerProcessMetrics {
    response: FxHashMap<ProcId, Ticks>,
    waiting: FxHashMap<ProcId, Ticks>,
    turnaround: FxHashMap<ProcId, Ticks>,
}

impl PerProcessMetrics {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            response: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            waiting: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            turnaround: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Response is captured exactly once, at the earliest dispatch.
    pub fn record_response(&mut self, id: ProcId, response: Ticks) {
        let prev = self.response.insert(id, response);
        debug_assert!(prev.is_none(), "response for process {id} recorded twice");
    }

    pub fn record_completion(&mut self, id: ProcId, waiting: Ticks, turnaround: Ticks) {
        let prev_waiting = self.waiting.insert(id, waiting);
        let prev_turnaround = self.turnaround.insert(id, turnaround);
        debug_assert!(
            prev_waiting.is_none() && prev_turnaround.is_none(),
            "process {id} completed twice"
        );
    }

    pub fn response(&self, id: ProcId) -> Option<Ticks> {
        self.response.get(&id).copied()
    }

    pub fn waiting(&self, id: ProcId) -> Option<Ticks> {
        self.waiting.get(&id).copied()
    }

    pub fn turnaround(&self, id: ProcId) -> Option<Ticks> {
        self.turnaround.get(&id).copied()
    }

    /// Number of processes that have completed so far.
    pub fn completed(&self) -> usize {
        self.turnaround.len()
    }
}

/// Arithmetic means of the three metrics, one triple per policy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateMetrics {
    pub mean_response: f64,
    pub mean_waiting: f64,
    pub mean_turnaround: f64,
}

impl AggregateMetrics {
    pub const ZERO: Self = Self {
        mean_response: 0.0,
        mean_waiting: 0.0,
        mean_turnaround: 0.0,
    };
}

/// Reduce per-process metrics to their means over `procs`. Pure. An
/// empty process set yields the zero triple; a missing map entry means
/// the scheduler that produced `per` is broken, not a caller error.
pub fn aggregate(procs: &[Process], per: &PerProcessMetrics) -> AggregateMetrics {
    if procs.is_empty() {
        return AggregateMetrics::ZERO;
    }

    let mean = |metric: &FxHashMap<ProcId, Ticks>| {
        procs
            .iter()
            .map(|p| *metric.get(&p.id).expect("metric missing for completed process") as f64)
            .collect::<Mean>()
            .estimate()
    };

    AggregateMetrics {
        mean_response: mean(&per.response),
        mean_waiting: mean(&per.waiting),
        mean_turnaround: mean(&per.turnaround),
    }
}
