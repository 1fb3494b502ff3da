pub mod driver;
pub mod input;
pub mod output;

pub use driver::{run_all, PolicyReport};
pub use input::{read_workload, InputError, Workload};
pub use output::render_report;
