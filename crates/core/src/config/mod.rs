//! Configuration loading and resolution.
//!
//! mdscan runs fine with no config file at all; the file exists to pin a
//! default vault, exclusions, artifact names and logging.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{LoggingConfig, OutputConfig, Profile, ResolvedConfig};
