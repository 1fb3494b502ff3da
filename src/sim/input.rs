use std::io::BufRead;

use thiserror::Error;

use crate::core::{ProcId, Process, Ticks};

/// One parsed input set: the round robin quantum plus the declared
/// processes.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    pub quantum: Ticks,
    pub processes: Vec<Process>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty, expected a quantum on the first line")]
    MissingQuantum,
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Line-oriented workload format: the first line is the quantum, every
/// following non-blank line is two whitespace-separated integers
/// "arrival burst". A record's process id is its physical line number
/// minus one, i.e. its 1-based position after the quantum line, so ids
/// stay stable even when blank lines leave gaps.
pub fn read_workload<R: BufRead>(reader: R) -> Result<Workload, InputError> {
    let mut lines = reader.lines();

    let quantum_line = lines.next().ok_or(InputError::MissingQuantum)??;
    let quantum: Ticks = quantum_line.trim().parse().map_err(|_| InputError::Malformed {
        line: 1,
        reason: "quantum must be a non-negative integer",
    })?;

    let mut processes = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let file_line = offset + 2;
        let mut fields = record.split_whitespace();
        let arrival = parse_field(fields.next(), file_line)?;
        let burst = parse_field(fields.next(), file_line)?;
        if fields.next().is_some() {
            return Err(InputError::Malformed {
                line: file_line,
                reason: "expected exactly two fields",
            });
        }

        processes.push(Process::new((file_line - 1) as ProcId, arrival, burst));
    }

    Ok(Workload { quantum, processes })
}

fn parse_field(field: Option<&str>, line: usize) -> Result<Ticks, InputError> {
    field
        .ok_or(InputError::Malformed {
            line,
            reason: "expected two whitespace-separated integers",
        })?
        .parse()
        .map_err(|_| InputError::Malformed {
            line,
            reason: "fields must be non-negative integers",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quantum_then_records() {
        let workload = read_workload("2\n0 4\n1 3\n".as_bytes()).unwrap();
        assert_eq!(workload.quantum, 2);
        assert_eq!(
            workload.processes,
            [Process::new(1, 0, 4), Process::new(2, 1, 3)]
        );
    }

    #[test]
    fn blank_lines_are_skipped_but_keep_line_numbering() {
        let workload = read_workload("4\n0 2\n\n3 1\n".as_bytes()).unwrap();
        assert_eq!(
            workload.processes,
            [Process::new(1, 0, 2), Process::new(3, 3, 1)]
        );
    }

    #[test]
    fn empty_input_is_missing_quantum() {
        let err = read_workload("".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::MissingQuantum));
    }

    #[test]
    fn negative_arrival_is_rejected() {
        let err = read_workload("2\n-1 4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 2, .. }));
    }

    #[test]
    fn extra_fields_are_rejected() {
        let err = read_workload("2\n0 4 9\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            InputError::Malformed {
                line: 2,
                reason: "expected exactly two fields"
            }
        ));
    }

    #[test]
    fn missing_burst_is_rejected() {
        let err = read_workload("2\n7\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { line: 2, .. }));
    }
}
