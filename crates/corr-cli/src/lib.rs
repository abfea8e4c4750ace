//! CLI library components for the correlation analyzer.

pub mod config;
pub mod logging;
pub mod progress;
