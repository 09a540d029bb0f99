//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Human (pretty) or JSON output on stderr
//! - Optional JSON log files with rotation

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
