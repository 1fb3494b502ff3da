use std::io::{self, Write};

use super::driver::PolicyReport;

/// Write one line per policy, in report order: the mean response,
/// waiting and turnaround times, comma-separated, rounded to three
/// decimal places.
pub fn render_report<W: Write>(writer: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    for report in reports {
        writeln!(
            writer,
            "{:.3}, {:.3}, {:.3}",
            report.metrics.mean_response, report.metrics.mean_waiting, report.metrics.mean_turnaround
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AggregateMetrics;

    #[test]
    fn renders_one_fixed_precision_line_per_policy() {
        let reports = [
            PolicyReport {
                policy: "FIFO",
                metrics: AggregateMetrics {
                    mean_response: 1.5,
                    mean_waiting: 1.5,
                    mean_turnaround: 5.0,
                },
            },
            PolicyReport {
                policy: "RR",
                metrics: AggregateMetrics {
                    mean_response: 1.0,
                    mean_waiting: 6.5,
                    mean_turnaround: 6.5,
                },
            },
        ];

        let mut out = Vec::new();
        render_report(&mut out, &reports).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.500, 1.500, 5.000\n1.000, 6.500, 6.500\n"
        );
    }

    #[test]
    fn empty_report_writes_nothing() {
        let mut out = Vec::new();
        render_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
