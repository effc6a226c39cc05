use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::collapse::Run;
use crate::error::{Result, UniqError};

/// Which runs are printed, and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Every run, representative only.
    #[default]
    Plain,
    /// Every run, prefixed with its count.
    Count,
    /// Runs of two or more lines.
    DuplicatesOnly,
    /// Runs of exactly one line.
    UniquesOnly,
}

impl OutputMode {
    pub fn keeps(&self, run: &Run) -> bool {
        match self {
            OutputMode::Plain | OutputMode::Count => true,
            OutputMode::DuplicatesOnly => run.is_duplicate(),
            OutputMode::UniquesOnly => !run.is_duplicate(),
        }
    }
}

/// Keep only the runs the mode prints. Order is unchanged.
pub fn select(runs: Vec<Run>, mode: OutputMode) -> Vec<Run> {
    runs.into_iter().filter(|run| mode.keeps(run)).collect()
}

/// Render runs as newline-terminated lines.
pub fn render(runs: &[Run], mode: OutputMode) -> String {
    let mut out = String::new();
    for run in runs.iter().filter(|run| mode.keeps(run)) {
        if mode == OutputMode::Count {
            out.push_str(&format!("{} {}\n", run.count, run.representative));
        } else {
            out.push_str(&run.representative);
            out.push('\n');
        }
    }
    out
}

/// Render and write runs in one shot, then flush.
pub fn write_runs<W: Write>(writer: &mut W, runs: &[Run], mode: OutputMode) -> Result<()> {
    let rendered = render(runs, mode);
    writer
        .write_all(rendered.as_bytes())
        .map_err(UniqError::Write)?;
    writer.flush().map_err(UniqError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Run> {
        vec![Run::new("a", 2), Run::new("b", 1), Run::new("c", 2)]
    }

    #[test]
    fn plain_keeps_everything() {
        assert_eq!(render(&sample(), OutputMode::Plain), "a\nb\nc\n");
    }

    #[test]
    fn count_prefixes_each_line() {
        assert_eq!(render(&sample(), OutputMode::Count), "2 a\n1 b\n2 c\n");
    }

    #[test]
    fn duplicates_only() {
        assert_eq!(
            select(sample(), OutputMode::DuplicatesOnly),
            vec![Run::new("a", 2), Run::new("c", 2)]
        );
        assert_eq!(render(&sample(), OutputMode::DuplicatesOnly), "a\nc\n");
    }

    #[test]
    fn uniques_only() {
        assert_eq!(
            select(sample(), OutputMode::UniquesOnly),
            vec![Run::new("b", 1)]
        );
        assert_eq!(render(&sample(), OutputMode::UniquesOnly), "b\n");
    }

    #[test]
    fn empty_runs_render_nothing() {
        assert_eq!(render(&[], OutputMode::Count), "");
    }

    #[test]
    fn write_runs_to_buffer() {
        let mut buf = Vec::new();
        write_runs(&mut buf, &sample(), OutputMode::Count).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 a\n1 b\n2 c\n");
    }

    #[test]
    fn mode_names_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: OutputMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"duplicates-only\"").unwrap();
        assert_eq!(parsed.mode, OutputMode::DuplicatesOnly);
    }
}
