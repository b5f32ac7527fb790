//! Environment overrides for the deck configuration.

use std::time::Duration;

use marsdeck::cli::{parse_args, CliCommand};
use marsdeck::config::{DeckConfig, DEFAULT_API_URL};
use serial_test::serial;

const VARS: [&str; 5] = [
    "MARSDECK_API_URL",
    "MARSDECK_API_KEY",
    "MARSDECK_SOL",
    "MARSDECK_START_PAGE",
    "MARSDECK_FETCH_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = DeckConfig::from_env();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.start_page, 1);
    assert_eq!(config.sol, Some(1000));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("MARSDECK_API_URL", "http://localhost:9000/");
    std::env::set_var("MARSDECK_API_KEY", "secret");
    std::env::set_var("MARSDECK_SOL", "42");
    std::env::set_var("MARSDECK_START_PAGE", "5");
    std::env::set_var("MARSDECK_FETCH_TIMEOUT_SECS", "3");

    let config = DeckConfig::from_env();
    clear_env();

    assert_eq!(config.api_base_url, "http://localhost:9000");
    assert_eq!(config.api_key.as_deref(), Some("secret"));
    assert_eq!(config.sol, Some(42));
    assert_eq!(config.start_page, 5);
    assert_eq!(config.fetch_timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_from_env_ignores_garbage_and_empty_key_disables() {
    clear_env();
    std::env::set_var("MARSDECK_SOL", "many");
    std::env::set_var("MARSDECK_API_KEY", "");

    let config = DeckConfig::from_env();
    clear_env();

    assert_eq!(config.sol, Some(1000));
    assert!(config.api_key.is_none());
}

#[test]
#[serial]
fn test_cli_flags_win_over_env() {
    clear_env();
    std::env::set_var("MARSDECK_START_PAGE", "5");

    let args = ["marsdeck", "--page", "2"].iter().map(|s| s.to_string());
    let CliCommand::Run(options) = parse_args(args) else {
        panic!("expected a run command");
    };
    let config = options.apply(DeckConfig::from_env());
    clear_env();

    assert_eq!(config.start_page, 2);
    assert!(config.validate().is_ok());
}
