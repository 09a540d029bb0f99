//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvSource: read access to named environment values
//!
//! The configuration provider only talks to this trait, so callers decide
//! whether values come from the real process environment or from memory.

pub mod env_source;

pub use env_source::{non_empty, EnvSource};
