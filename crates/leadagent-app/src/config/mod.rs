//! Configuration file parsing for Lead Agent
//!
//! Settings live in `<config_dir>/lead-agent/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_strict, validate,
};
pub use types::*;
