use super::state::{ProcId, Ticks};

/// One context switch: the simulated CPU starts or resumes process `id`
/// at tick `at`. A run's dispatch log is the Gantt chart of the
/// schedule; tests assert on it directly where ordering rules matter
/// more than the resulting means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub at: Ticks,
    pub id: ProcId,
}
