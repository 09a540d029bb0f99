//! Infrastructure layer module
//!
//! Adapters behind the domain ports and the tool's ambient concerns:
//! - Environment sources (process environment, in-memory map)
//! - Tool settings loading (figment)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod env;
pub mod logging;
