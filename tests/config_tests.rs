//! Configuration loading tests.
//!
//! `ServerConfig::load()` touches process-global environment variables, so
//! every test here goes through the scoped-env helper.

mod support;

use cafe_rust::config::{ConfigError, ServerConfig};
use support::with_scoped_env;

const CONFIG_VARS: [&str; 3] = ["HOST", "PORT", "CAFE_SEED_MENU"];

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    CONFIG_VARS.iter().map(|k| (*k, None)).collect()
}

#[test]
fn test_defaults_without_file_or_env() {
    let config = with_scoped_env(&cleared(), || ServerConfig::load().unwrap());

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert!(!config.server.seed_menu);
    assert_eq!(config.bind_addr(), "127.0.0.1:5000");
}

#[test]
fn test_env_overrides_take_precedence() {
    let config = with_scoped_env(
        &[
            ("HOST", Some("0.0.0.0")),
            ("PORT", Some("8080")),
            ("CAFE_SEED_MENU", None),
        ],
        || ServerConfig::load().unwrap(),
    );

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_seed_menu_env_flag_spellings() {
    for (value, expected) in [("1", true), ("true", true), ("yes", true), ("0", false)] {
        let config = with_scoped_env(
            &[
                ("HOST", None),
                ("PORT", None),
                ("CAFE_SEED_MENU", Some(value)),
            ],
            || ServerConfig::load().unwrap(),
        );
        assert_eq!(config.server.seed_menu, expected, "CAFE_SEED_MENU={}", value);
    }
}

#[test]
fn test_invalid_port_env_is_an_error() {
    let result = with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", Some("coffee")),
            ("CAFE_SEED_MENU", None),
        ],
        ServerConfig::load,
    );

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("cafe-config-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[server]\nhost = \"10.0.0.1\"\nport = 7000\n").unwrap();

    let config = ServerConfig::from_file(&path).unwrap();
    assert_eq!(config.server.host, "10.0.0.1");
    assert_eq!(config.server.port, 7000);
    assert!(!config.server.seed_menu);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_from_file_missing_is_read_error() {
    let result = ServerConfig::from_file("definitely/not/a/real/cafe.toml");
    assert!(matches!(result, Err(ConfigError::Read(_))));
}
