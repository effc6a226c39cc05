pub mod resolve;
pub mod types;

pub use resolve::{load_config, resolve_config, CONFIG_ENV};
pub use types::UniqConfig;
