//! Settings file, environment overrides and command-line parsing.
//!
//! Tests touching `LISTICK_*` variables run serially because the process
//! environment is shared.

use std::fs;

use listick::app::Page;
use listick::carousel::MIN_INTERVAL_MS;
use listick::cli::args::{parse_args, CliCommand};
use listick::error::ListickError;
use listick::startup::config::{
    ENV_FIRESTORE_API_KEY, ENV_FIRESTORE_PROJECT, ENV_OFFLINE, ENV_REDUCED_MOTION,
};
use listick::startup::{SiteConfig, StartupConfig};
use serial_test::serial;
use tempfile::TempDir;

const ALL_ENV: [&str; 4] = [
    ENV_FIRESTORE_PROJECT,
    ENV_FIRESTORE_API_KEY,
    ENV_OFFLINE,
    ENV_REDUCED_MOTION,
];

fn clear_env() {
    for name in ALL_ENV {
        std::env::remove_var(name);
    }
}

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("listick")
        .chain(list.iter().copied())
        .map(String::from)
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = SiteConfig::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "home_carousel": { "interval_ms": 4000, "show_autoplay_toggle": false } }"#,
    )
    .unwrap();

    let config = SiteConfig::load_from(&path).unwrap();
    assert_eq!(config.home_carousel.interval_ms, 4000);
    assert!(!config.home_carousel.show_autoplay_toggle);
    assert!(config.home_carousel.autoplay);
    assert_eq!(config.features_carousel, SiteConfig::default().features_carousel);
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = SiteConfig::load_from(&path).unwrap_err();
    assert!(matches!(err.inner(), ListickError::Config { path: Some(_), .. }));
    let context = err.context().unwrap();
    assert_eq!(context.operation, "load_config");
    assert_eq!(context.target.as_deref(), Some(path.to_str().unwrap()));
    assert!(err.to_string().contains("[load_config]"));
}

#[test]
#[serial]
fn test_out_of_range_intervals_are_repaired() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "home_carousel": { "interval_ms": 10 },
            "features_carousel": { "interval_ms": 0 },
            "tick_rate_ms": 0
        }"#,
    )
    .unwrap();

    let site = StartupConfig::new()
        .with_config_path(&path)
        .load_site_config()
        .unwrap();
    assert_eq!(site.home_carousel.interval_ms, MIN_INTERVAL_MS);
    assert!(site.home_carousel.autoplay);
    assert!(!site.features_carousel.autoplay);
    assert!(site.features_carousel.interval_ms > 0);
    assert!(site.tick_rate().as_millis() > 0);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "firestore": { "project_id": "from-file" } }"#).unwrap();

    std::env::set_var(ENV_FIRESTORE_PROJECT, "from-env");
    std::env::set_var(ENV_FIRESTORE_API_KEY, "key-123");
    std::env::set_var(ENV_REDUCED_MOTION, "1");

    let site = StartupConfig::new()
        .with_config_path(&path)
        .load_site_config()
        .unwrap();
    clear_env();

    assert_eq!(site.firestore.project_id.as_deref(), Some("from-env"));
    assert_eq!(site.firestore.api_key.as_deref(), Some("key-123"));
    assert!(site.reduced_motion);
    assert!(!site.offline);
}

#[test]
#[serial]
fn test_unparseable_reduced_motion_is_ignored() {
    clear_env();
    std::env::set_var(ENV_REDUCED_MOTION, "sometimes");
    let mut site = SiteConfig::default();
    site.apply_env();
    clear_env();
    assert!(!site.reduced_motion);
}

#[test]
#[serial]
fn test_offline_from_env_and_flag() {
    clear_env();
    std::env::set_var(ENV_OFFLINE, "true");
    assert!(StartupConfig::from_env().offline);
    std::env::set_var(ENV_OFFLINE, "0");
    assert!(!StartupConfig::from_env().offline);
    clear_env();

    let dir = TempDir::new().unwrap();
    let site = StartupConfig::new()
        .with_offline(true)
        .with_config_path(dir.path().join("missing.json"))
        .load_site_config()
        .unwrap();
    assert!(site.offline);
}

#[test]
fn test_cli_flags_build_startup_config() {
    let command = parse_args(
        args(&["--page", "future-plans", "--offline", "--no-log", "--config", "/tmp/s.json"]),
        StartupConfig::default(),
    );
    let CliCommand::RunTui(config) = command else {
        panic!("expected RunTui, got {:?}", command);
    };
    assert_eq!(config.initial_page, Page::FuturePlans);
    assert!(config.offline);
    assert!(!config.enable_logging);
    assert_eq!(config.config_path.as_deref(), Some(std::path::Path::new("/tmp/s.json")));
}

#[test]
fn test_cli_rejects_unknown_page() {
    let command = parse_args(args(&["--page", "pricing"]), StartupConfig::default());
    assert!(matches!(command, CliCommand::Invalid(msg) if msg.contains("pricing")));

    let command = parse_args(args(&["--page"]), StartupConfig::default());
    assert!(matches!(command, CliCommand::Invalid(_)));
}
