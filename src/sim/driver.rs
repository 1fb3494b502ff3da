use log::debug;

use crate::core::{aggregate, AggregateMetrics, Process, Ticks};
use crate::scheduler::{validate, Fifo, Policy, RoundRobin, SimError, Sjf, Srt};

/// One policy's aggregate result, tagged by policy name for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyReport {
    pub policy: &'static str,
    pub metrics: AggregateMetrics,
}

/// Run every policy against the same workload. The input is validated
/// once; results come back in the fixed FIFO, SJF, SRT, RR order. The
/// runs are independent pure computations over the same borrowed slice.
pub fn run_all(procs: &[Process], quantum: Ticks) -> Result<Vec<PolicyReport>, SimError> {
    validate(procs)?;
    let rr = RoundRobin::new(quantum)?;
    let policies: [&dyn Policy; 4] = [&Fifo, &Sjf, &Srt, &rr];

    let mut reports = Vec::with_capacity(policies.len());
    for policy in policies {
        let outcome = policy.run(procs);
        let metrics = aggregate(procs, &outcome.metrics);
        debug!(
            "{}: {} dispatches, mean turnaround {:.3}",
            policy.name(),
            outcome.dispatches.len(),
            metrics.mean_turnaround
        );
        reports.push(PolicyReport {
            policy: policy.name(),
            metrics,
        });
    }
    Ok(reports)
}
