//! Tick-level simulation of classical CPU scheduling policies.
//!
//! Each process is an `(id, arrival, burst)` record over abstract
//! integer ticks. The four policies (FIFO, SJF, SRT, round robin)
//! simulate the same declared workload independently and report the
//! mean response, waiting and turnaround times.

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{AggregateMetrics, PerProcessMetrics, ProcId, Process, Ticks};
pub use crate::scheduler::{fifo, round_robin, sjf, srt, Policy, SimError, SimOutcome};
