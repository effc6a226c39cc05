//! Option resolution and I/O glue for the uniq binary.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::debug;
use uniq_core::{OutputMode, UniqConfig, UniqError};

/// Command-line switches that shape a pass.
#[derive(Args, Debug, Default, Clone)]
pub struct Flags {
    /// Prefix lines by the number of occurrences
    #[arg(short = 'c')]
    pub count: bool,

    /// Only print duplicate lines, one for each group
    #[arg(short = 'd')]
    pub duplicates: bool,

    /// Only print unique lines
    #[arg(short = 'u')]
    pub uniques: bool,

    /// Ignore case when comparing lines
    #[arg(short = 'i')]
    pub ignore_case: bool,

    /// Skip the first NUM fields when comparing
    #[arg(short = 'f', value_name = "num", allow_negative_numbers = true)]
    pub skip_fields: Option<i64>,

    /// Skip the first CHARS characters when comparing
    #[arg(short = 's', value_name = "chars", allow_negative_numbers = true)]
    pub skip_chars: Option<i64>,
}

// ---------------------------------------------------------------------------
// Option resolution
// ---------------------------------------------------------------------------

/// Validated command-line overrides, applied on top of a config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overrides {
    pub mode: Option<OutputMode>,
    pub ignore_case: bool,
    pub skip_fields: Option<usize>,
    pub skip_chars: Option<usize>,
}

impl Overrides {
    /// Check the flags on their own, before any config is loaded.
    ///
    /// At most one of `-c`, `-d`, `-u` may be given; `-f`/`-s` must not be
    /// negative.
    pub fn from_flags(flags: &Flags) -> Result<Self, UniqError> {
        let selected: Vec<OutputMode> = [
            (flags.count, OutputMode::Count),
            (flags.duplicates, OutputMode::DuplicatesOnly),
            (flags.uniques, OutputMode::UniquesOnly),
        ]
        .into_iter()
        .filter_map(|(set, mode)| set.then_some(mode))
        .collect();

        let mode = match selected.as_slice() {
            [] => None,
            [mode] => Some(*mode),
            _ => {
                return Err(UniqError::Usage {
                    usage: uniq_core::USAGE,
                })
            }
        };

        Ok(Self {
            mode,
            ignore_case: flags.ignore_case,
            skip_fields: flags.skip_fields.map(|n| non_negative('f', n)).transpose()?,
            skip_chars: flags.skip_chars.map(|n| non_negative('s', n)).transpose()?,
        })
    }

    pub fn apply(&self, base: UniqConfig) -> UniqConfig {
        let mut config = base;
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.ignore_case {
            config.ignore_case = true;
        }
        if let Some(n) = self.skip_fields {
            config.skip_fields = n;
        }
        if let Some(n) = self.skip_chars {
            config.skip_chars = n;
        }
        config
    }
}

/// Apply command-line flags on top of a base config.
pub fn resolve_options(flags: &Flags, base: UniqConfig) -> Result<UniqConfig, UniqError> {
    Ok(Overrides::from_flags(flags)?.apply(base))
}

fn non_negative(flag: char, value: i64) -> Result<usize, UniqError> {
    usize::try_from(value).map_err(|_| UniqError::InvalidArgument { flag, value })
}

// ---------------------------------------------------------------------------
// Uniq — read, collapse, write
// ---------------------------------------------------------------------------

/// Run one pass: the whole input is read and processed before any output
/// file is created or written.
pub fn cmd_uniq(
    flags: &Flags,
    config_path: Option<&Path>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    // Bad flags are reported even when the config file is broken
    let overrides = Overrides::from_flags(flags)?;
    let base = uniq_core::config::resolve_config(
        config_path,
        std::env::var_os(uniq_core::config::CONFIG_ENV),
    )?;
    let config = overrides.apply(base);
    debug!(?config, "resolved options");

    let lines = match input {
        Some(path) => {
            let file = File::open(path).map_err(|source| UniqError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            uniq_core::input::read_lines(file)?
        }
        None => uniq_core::input::read_lines(io::stdin().lock())?,
    };

    let runs = uniq_core::run(&lines, &config);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| UniqError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
            uniq_core::write_runs(&mut BufWriter::new(file), &runs, config.mode)?;
        }
        None => uniq_core::write_runs(&mut io::stdout().lock(), &runs, config.mode)?,
    }

    Ok(())
}
