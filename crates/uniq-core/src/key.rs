/// How much of each line's leading text is ignored when comparing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationPolicy {
    pub skip_fields: usize,
    pub skip_chars: usize,
}

impl NormalizationPolicy {
    pub fn new(skip_fields: usize, skip_chars: usize) -> Self {
        Self {
            skip_fields,
            skip_chars,
        }
    }

    /// True when no fields or characters are skipped.
    pub fn is_identity(&self) -> bool {
        self.skip_fields == 0 && self.skip_chars == 0
    }
}

/// Derive the comparison key for a line.
///
/// The remaining fields are re-joined with single spaces, so runs of
/// whitespace between fields do not affect equality. Skipping more fields
/// than the line has yields an empty key.
pub fn normalize(line: &str, policy: NormalizationPolicy) -> String {
    if line.is_empty() {
        return String::new();
    }

    let joined = line
        .split_whitespace()
        .skip(policy.skip_fields)
        .collect::<Vec<_>>()
        .join(" ");

    // Count in chars, never split a UTF-8 sequence
    match joined.char_indices().nth(policy.skip_chars) {
        Some((start, _)) => joined[start..].to_string(),
        None => String::new(),
    }
}

/// Keys for every line, or `None` when lines should be compared as-is.
pub fn normalize_all(lines: &[String], policy: NormalizationPolicy) -> Option<Vec<String>> {
    if policy.is_identity() {
        return None;
    }
    Some(lines.iter().map(|line| normalize(line, policy)).collect())
}
