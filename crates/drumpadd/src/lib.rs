//! Host harness for the IINE Pro Max drum driver: config loading, capture
//! files and a replay host that drives a device from recorded frames.

pub mod capture;
pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;

pub use capture::{load_capture, parse_capture, CaptureError, CaptureFrame};
pub use config::{load_config, parse_config, ConfigError};
pub use replay::{format_state, Replay, ReplayError, ReplaySummary};
