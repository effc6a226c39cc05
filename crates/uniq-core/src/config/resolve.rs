use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::UniqConfig;
use crate::error::{Result, UniqError};

/// Environment variable naming a config file, used when no path is passed.
pub const CONFIG_ENV: &str = "UNIQ_CONFIG";

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<UniqConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| UniqError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| UniqError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick the config source:
/// 1. `explicit` path (from `--config`)
/// 2. `env_path` (the value of `UNIQ_CONFIG`), ignored when empty
/// 3. built-in defaults
pub fn resolve_config(explicit: Option<&Path>, env_path: Option<OsString>) -> Result<UniqConfig> {
    let path: Option<PathBuf> = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => env_path.filter(|v| !v.is_empty()).map(PathBuf::from),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        }
        None => Ok(UniqConfig::default()),
    }
}
