//! Configuration system for the Tellus globe.
//!
//! Settings persist to disk as a RON file (`config.ron`), accept CLI
//! overrides via clap, and detect on-disk changes for hot reload. Every
//! section carries `#[serde(default)]`, so old files keep loading as fields
//! are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CameraConfig, Config, DebugConfig, DriftConfig, GlobeConfig, StyleConfig,
    TimelineConfig, WindowConfig, default_config_dir,
};
pub use error::ConfigError;
