use crate::domain::ports::EnvSource;

/// Reads from the current process environment.
///
/// Values that are not valid UTF-8 are converted lossily rather than
/// treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
