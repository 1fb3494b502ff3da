use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use log::{info, warn};

use policy_sim::sim::{read_workload, render_report, run_all};

fn main() {
    env_logger::init();

    let inputs: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        eprintln!("usage: policy-sim <input file>...");
        process::exit(2);
    }

    let mut failures = 0;
    for path in &inputs {
        if let Err(err) = run_file(path) {
            warn!("{}: {err:#}", path.display());
            failures += 1;
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}

fn run_file(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let workload = read_workload(BufReader::new(file))?;
    let reports = run_all(&workload.processes, workload.quantum)?;

    let out_path = result_path(path);
    let out = File::create(&out_path).with_context(|| format!("creating {}", out_path.display()))?;
    let mut out = BufWriter::new(out);
    render_report(&mut out, &reports)?;
    out.flush()?;

    info!(
        "{}: {} processes, wrote {}",
        path.display(),
        workload.processes.len(),
        out_path.display()
    );
    Ok(())
}

// TESTE-01.txt becomes TESTE-01-result.txt next to the input.
fn result_path(path: &Path) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("input");
    path.with_file_name(format!("{stem}-result.txt"))
}
