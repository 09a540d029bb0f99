//! Environment sources
//!
//! - `ProcessEnv`: the real process environment
//! - `MapEnv`: an in-memory map, for tests and for callers that assemble
//!   values themselves

pub mod map;
pub mod process;

pub use map::MapEnv;
pub use process::ProcessEnv;
