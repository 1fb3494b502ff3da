pub type ProcId = u32;
pub type Ticks = u64;

/// Immutable input record: a process declared up front with its arrival
/// tick and total CPU burst. Identifiers are caller-assigned and unique
/// within one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: ProcId,
    pub arrival: Ticks,
    pub burst: Ticks,
}

impl Process {
    pub fn new(id: ProcId, arrival: Ticks, burst: Ticks) -> Self {
        Self { id, arrival, burst }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Pending,
    Ready,
    Running,
    Complete,
}

impl ProcState {
    // Running -> Ready is preemption; Ready -> Complete never happens
    // directly, a process must pass through Running.
    pub fn may_transition(self, to: ProcState) -> bool {
        use ProcState::*;
        matches!(
            (self, to),
            (Pending, Ready) | (Ready, Running) | (Running, Ready) | (Running, Complete)
        )
    }
}

/// Mutable bookkeeping for one process inside a single preemptive
/// simulation run. Pending processes live in the arrival-ordered list
/// and only get a `SimProc` once admitted to the ready set, so `admit`
/// starts in `Ready`. `seq` is the admission order, used as the stable
/// tie-break key when a ready set is re-sorted.
#[derive(Debug)]
pub struct SimProc {
    pub proc: Process,
    pub remaining: Ticks,
    pub started: bool,
    pub state: ProcState,
    pub seq: u64,
}

impl SimProc {
    pub fn admit(proc: Process, seq: u64) -> Self {
        Self {
            proc,
            remaining: proc.burst,
            started: false,
            state: ProcState::Ready,
            seq,
        }
    }

    pub fn transition(&mut self, to: ProcState) {
        debug_assert!(
            self.state.may_transition(to),
            "illegal transition {:?} -> {:?} for process {}",
            self.state,
            to,
            self.proc.id
        );
        self.state = to;
    }
}
