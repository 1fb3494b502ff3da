pub mod event;
pub mod metrics;
pub mod state;

pub use event::Dispatch;
pub use metrics::{aggregate, AggregateMetrics, PerProcessMetrics};
pub use state::{ProcId, ProcState, Process, SimProc, Ticks};
