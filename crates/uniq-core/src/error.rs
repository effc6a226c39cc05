use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at the I/O and option-validation boundary.
///
/// Normalizing and collapsing never fail; everything here comes from
/// argument checking, configuration loading, or file handling.
#[derive(Debug, Error)]
pub enum UniqError {
    #[error("{usage}")]
    Usage { usage: &'static str },
    #[error("-{flag} value should be > 0")]
    InvalidArgument { flag: char, value: i64 },
    #[error("failed to open input `{path}`: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create output `{path}`: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to read config `{path}`: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config `{path}`: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl UniqError {
    /// Process exit status for this error: 2 for bad invocations, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            UniqError::Usage { .. } | UniqError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, UniqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_flag() {
        let err = UniqError::InvalidArgument {
            flag: 'f',
            value: -3,
        };
        assert_eq!(err.to_string(), "-f value should be > 0");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_errors_exit_with_one() {
        let err = UniqError::OpenInput {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert_eq!(err.exit_code(), 1);
    }
}
