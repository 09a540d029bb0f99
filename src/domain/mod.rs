//! Domain layer for the web client configuration
//!
//! This module contains the configuration record, its provenance report and
//! the port through which environment values are read.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{MissingFields, SettingsError};
