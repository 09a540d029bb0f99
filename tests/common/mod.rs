//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

#![allow(dead_code)]

use webconfig::{ConfigKey, MapEnv};

/// Build an in-memory environment from `(variable, value)` pairs.
pub fn react_env(pairs: &[(&str, &str)]) -> MapEnv {
    pairs.iter().copied().collect()
}

/// Run `f` with the process environment holding exactly `pairs` for the
/// nine `REACT_APP_*` variables; every other configuration variable is
/// unset for the duration of the call.
pub fn with_react_env<R>(pairs: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ConfigKey::ALL
        .into_iter()
        .map(|key| {
            let name = key.env_var();
            let value = pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v);
            (name, value)
        })
        .collect();

    temp_env::with_vars(vars, f)
}
