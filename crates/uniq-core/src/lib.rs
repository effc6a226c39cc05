pub mod collapse;
pub mod config;
pub mod error;
pub mod input;
pub mod key;
pub mod output;

pub use collapse::{collapse, Collapser, ComparisonPolicy, Run};
pub use config::UniqConfig;
pub use error::{Result, UniqError};
pub use key::{normalize, normalize_all, NormalizationPolicy};
pub use output::{render, select, write_runs, OutputMode};

/// Usage line reported on conflicting output-mode flags.
pub const USAGE: &str = "uniq [-c | -d | -u] [-i] [-f num] [-s chars] [input_file [output_file]]";

/// Run the full pipeline over already-read lines.
///
/// Pipeline order:
/// 1. Derive comparison keys (skipped when the policy is the identity)
/// 2. Collapse adjacent runs
/// 3. Select runs for the configured output mode
pub fn run(lines: &[String], config: &UniqConfig) -> Vec<Run> {
    let keys = normalize_all(lines, config.policy());
    let runs = collapse(lines, keys.as_deref(), config.comparison());
    select(runs, config.mode)
}
