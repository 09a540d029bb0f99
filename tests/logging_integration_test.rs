// Integration test for logging
// Note: initializes the global subscriber, so this file holds a single test

use std::fs;
use tempfile::TempDir;
use webconfig::{AppConfig, LogConfig, LogFormat, LoggerImpl, MapEnv, RotationPolicy};

#[test]
fn test_logging_to_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "debug".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        file_name: "webconfig.log".to_string(),
        rotation: RotationPolicy::Never,
    };

    // RUST_LOG would override the configured level
    let logger = temp_env::with_var_unset("RUST_LOG", || LoggerImpl::init(&config)).unwrap();
    assert!(logger.has_file_output());

    // Resolution logs absent fields and the derived defaults at debug level
    let env = MapEnv::new().with("REACT_APP_CLIENT_ID", "secret-client-id");
    let resolved = AppConfig::from_env(&env);
    assert_eq!(resolved.client_id(), Some("secret-client-id"));

    // A second initialization must fail instead of panicking
    assert!(LoggerImpl::init(&config).is_err());

    // Dropping the logger flushes the non-blocking writer
    drop(logger);

    let contents = fs::read_to_string(temp_dir.path().join("webconfig.log")).unwrap();
    assert!(contents.contains("configuration value not set"));
    assert!(contents.contains("REACT_APP_AWS_REGION"));
    assert!(contents.contains("scope not set, using default"));
    assert!(
        !contents.contains("secret-client-id"),
        "values must never be logged"
    );

    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        serde_json::from_str::<serde_json::Value>(line).expect("file log lines are JSON");
    }
}
