use std::borrow::Cow;

use tracing::{debug, trace, warn};

/// How two keys are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonPolicy {
    pub case_insensitive: bool,
}

impl ComparisonPolicy {
    fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }
}

/// One maximal run of adjacent equal lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Raw text of the first line in the run.
    pub representative: String,
    pub count: usize,
}

impl Run {
    pub fn new(representative: impl Into<String>, count: usize) -> Self {
        Self {
            representative: representative.into(),
            count,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.count >= 2
    }
}

#[derive(Debug)]
struct OpenRun {
    /// Key of the run's first line, already case-folded if required.
    key: String,
    representative: String,
    count: usize,
}

/// Incremental scan over lines and their keys.
///
/// Each pushed line either extends the open run or closes it and opens a
/// new one. `finish` closes whatever run is still open.
#[derive(Debug, Default)]
pub struct Collapser {
    policy: ComparisonPolicy,
    open: Option<OpenRun>,
    runs: Vec<Run>,
}

impl Collapser {
    pub fn new(policy: ComparisonPolicy) -> Self {
        Self {
            policy,
            open: None,
            runs: Vec::new(),
        }
    }

    /// Feed the next line with its comparison key.
    pub fn push(&mut self, line: &str, key: &str) {
        let folded = self.policy.fold(key);

        if let Some(open) = self.open.as_mut() {
            if open.key == folded {
                open.count += 1;
                return;
            }
        }

        if let Some(closed) = self.open.take() {
            trace!(count = closed.count, "closing run");
            self.runs.push(Run {
                representative: closed.representative,
                count: closed.count,
            });
        }

        self.open = Some(OpenRun {
            key: folded.into_owned(),
            representative: line.to_string(),
            count: 1,
        });
    }

    /// Close the open run, if any, and return all runs in input order.
    pub fn finish(mut self) -> Vec<Run> {
        if let Some(open) = self.open.take() {
            self.runs.push(Run {
                representative: open.representative,
                count: open.count,
            });
        }
        self.runs
    }
}

/// Collapse adjacent equal lines into runs.
///
/// Without `keys` the lines themselves are compared. With `keys`, entry `i`
/// is the comparison key for `lines[i]`; the representative is always the
/// raw line. Keys whose length differs from `lines` are ignored and the raw
/// lines are compared instead, so every line is still counted.
pub fn collapse(lines: &[String], keys: Option<&[String]>, policy: ComparisonPolicy) -> Vec<Run> {
    let mut collapser = Collapser::new(policy);

    let keys = keys.filter(|keys| {
        let parallel = keys.len() == lines.len();
        if !parallel {
            warn!(
                lines = lines.len(),
                keys = keys.len(),
                "key count does not match line count, comparing raw lines"
            );
        }
        parallel
    });

    match keys {
        Some(keys) => {
            for (line, key) in lines.iter().zip(keys) {
                collapser.push(line, key);
            }
        }
        None => {
            for line in lines {
                collapser.push(line, line);
            }
        }
    }

    let runs = collapser.finish();
    debug!(lines = lines.len(), runs = runs.len(), "collapsed input");
    runs
}
