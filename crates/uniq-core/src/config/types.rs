use serde::{Deserialize, Serialize};

use crate::collapse::ComparisonPolicy;
use crate::key::NormalizationPolicy;
use crate::output::OutputMode;

/// Everything that controls a single pass: output mode plus comparison policy.
///
/// Every field is optional in TOML; missing fields take the plain,
/// case-sensitive, no-skip defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UniqConfig {
    pub mode: OutputMode,
    pub ignore_case: bool,
    pub skip_fields: usize,
    pub skip_chars: usize,
}

impl UniqConfig {
    pub fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy::new(self.skip_fields, self.skip_chars)
    }

    pub fn comparison(&self) -> ComparisonPolicy {
        ComparisonPolicy {
            case_insensitive: self.ignore_case,
        }
    }
}
