//! Resolution scenarios for the web client configuration, against both the
//! in-memory and the real process environment.

mod common;

use common::{react_env, with_react_env};
use std::sync::Arc;
use webconfig::{AppConfig, ConfigKey, ConfigReport, FieldSource, ProcessEnv, DEFAULT_SCOPE};

#[test]
fn test_region_and_user_pool_scenario() {
    let env = react_env(&[
        ("REACT_APP_AWS_REGION", "us-east-1"),
        ("REACT_APP_COGNITO_USERPOOL", "pool123"),
    ]);
    let config = AppConfig::from_env(&env);

    assert_eq!(
        config.issuer(),
        "https://cognito-idp.us-east-1.amazonaws.com/pool123"
    );
    assert_eq!(config.scope(), "openid profile email");
    assert_eq!(config.region(), Some("us-east-1"));
    assert_eq!(config.user_pool(), Some("pool123"));
    for key in [
        ConfigKey::UserPoolBaseUri,
        ConfigKey::ClientId,
        ConfigKey::ApiUri,
        ConfigKey::Environment,
        ConfigKey::AwsAccount,
    ] {
        assert_eq!(config.get(key), None, "{key} should be absent");
    }
}

#[test]
fn test_fully_unset_scenario() {
    let config = AppConfig::from_env(&react_env(&[]));

    assert_eq!(
        config.issuer(),
        "https://cognito-idp.undefined.amazonaws.com/undefined"
    );
    assert_eq!(config.scope(), DEFAULT_SCOPE);
    assert!(ConfigKey::DIRECT.iter().all(|key| config.get(*key).is_none()));
}

#[test]
fn test_fully_configured_deployment() {
    let env = react_env(&[
        ("REACT_APP_AWS_REGION", "eu-central-1"),
        ("REACT_APP_COGNITO_USERPOOL", "eu-central-1_AbCdEf"),
        (
            "REACT_APP_COGNITO_USERPOOL_BASE_URI",
            "https://auth.example.com",
        ),
        ("REACT_APP_CLIENT_ID", "3n4b5urk1ft4fl3mg5e1m5vk"),
        ("REACT_APP_API_URI", "https://api.example.com/v1"),
        ("REACT_APP_ENVIRONMENT", "staging"),
        ("REACT_APP_AWS_ACCOUNT", "000123456789"),
        ("REACT_APP_ISSUER", "https://issuer.example.com"),
        ("REACT_APP_SCOPE", "openid email aws.cognito.signin.user.admin"),
    ]);
    let config = AppConfig::from_env(&env);

    assert_eq!(config.user_pool_base_uri(), Some("https://auth.example.com"));
    assert_eq!(config.client_id(), Some("3n4b5urk1ft4fl3mg5e1m5vk"));
    assert_eq!(config.api_uri(), Some("https://api.example.com/v1"));
    assert_eq!(config.environment(), Some("staging"));
    assert_eq!(config.aws_account(), Some("000123456789"));
    assert_eq!(config.issuer(), "https://issuer.example.com");
    assert_eq!(config.scope(), "openid email aws.cognito.signin.user.admin");

    let report = ConfigReport::inspect(&env);
    assert!(report.is_complete());
    assert!(report
        .fields()
        .iter()
        .all(|field| field.source == FieldSource::Environment));
}

#[test]
fn test_builder_matches_env_resolution() {
    let env = react_env(&[
        ("REACT_APP_AWS_REGION", "us-west-2"),
        ("REACT_APP_CLIENT_ID", "client"),
        ("REACT_APP_SCOPE", ""),
    ]);
    let built = AppConfig::builder()
        .region("us-west-2")
        .client_id("client")
        .scope("")
        .build();

    assert_eq!(built, AppConfig::from_env(&env));
    assert_eq!(built.scope(), DEFAULT_SCOPE);
}

#[test]
fn test_config_is_shareable_across_threads() {
    let config = Arc::new(AppConfig::from_env(&react_env(&[(
        "REACT_APP_API_URI",
        "https://api.example.com",
    )])));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.api_uri().map(str::to_string))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("https://api.example.com")
        );
    }
}

#[test]
fn test_process_env_scenario() {
    with_react_env(
        &[
            ("REACT_APP_AWS_REGION", "us-east-1"),
            ("REACT_APP_COGNITO_USERPOOL", "pool123"),
        ],
        || {
            let config = AppConfig::from_env(&ProcessEnv);
            assert_eq!(
                config.issuer(),
                "https://cognito-idp.us-east-1.amazonaws.com/pool123"
            );
            assert_eq!(config.scope(), DEFAULT_SCOPE);
            assert_eq!(config.client_id(), None);
        },
    );
}

#[test]
fn test_process_env_unset_scenario() {
    with_react_env(&[], || {
        let config = AppConfig::from_env(&ProcessEnv);
        assert_eq!(
            config.issuer(),
            "https://cognito-idp.undefined.amazonaws.com/undefined"
        );
        assert!(ConfigKey::DIRECT.iter().all(|key| config.get(*key).is_none()));
    });
}

#[test]
fn test_process_env_empty_overrides() {
    with_react_env(
        &[
            ("REACT_APP_ISSUER", ""),
            ("REACT_APP_SCOPE", ""),
            ("REACT_APP_ENVIRONMENT", ""),
        ],
        || {
            let config = AppConfig::from_env(&ProcessEnv);
            assert_eq!(
                config.issuer(),
                "https://cognito-idp.undefined.amazonaws.com/undefined"
            );
            assert_eq!(config.scope(), DEFAULT_SCOPE);
            assert_eq!(config.environment(), Some(""));
        },
    );
}
