//! End-to-end test for the save flow
//!
//! Exercises the complete path: load settings -> edit -> save through the
//! store -> robots.txt synchronized on disk.

use pretty_assertions::assert_eq;
use robots_core::{
    CapturingSink, Environment, ROBOTS_FILE_NAME, RobotsSettings, RobotsTxtSynchronizer,
    SettingsStore,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Set up a site root with a provisioned public/robots.txt
fn setup_site() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    fs::create_dir(&public).unwrap();
    fs::write(public.join(ROBOTS_FILE_NAME), "").unwrap();
    (temp, public)
}

fn store_for(site: &TempDir, public: &Path, env: Environment) -> (SettingsStore, Arc<CapturingSink>) {
    let sink = Arc::new(CapturingSink::new());
    let syncer = RobotsTxtSynchronizer::with_sink(public, env, sink.clone());
    (SettingsStore::new(site.path().join("state"), syncer), sink)
}

#[test]
fn test_save_edit_save_cycle_in_dev() {
    let (site, public) = setup_site();
    let (store, sink) = store_for(&site, &public, Environment::Dev);

    // First load: nothing persisted yet, defaults apply
    let mut settings = store.load().unwrap();
    assert_eq!(settings, RobotsSettings::default());

    // Admin fills in both rule sets and saves
    settings.live_content = "User-agent: *\nDisallow:".into();
    settings.test_content = "Disallow: /admin".into();
    store.save(&settings).unwrap();

    // Non-live environment publishes the test rules
    let robots = fs::read_to_string(public.join(ROBOTS_FILE_NAME)).unwrap();
    assert_eq!(robots, "Disallow: /admin");

    // Record round-trips
    assert_eq!(store.load().unwrap(), settings);

    // Admin toggles off and saves again
    settings.enabled = false;
    store.save(&settings).unwrap();

    let robots = fs::read_to_string(public.join(ROBOTS_FILE_NAME)).unwrap();
    assert_eq!(robots, "");
    assert!(public.join(ROBOTS_FILE_NAME).exists());
    assert!(sink.is_empty());
}

#[test]
fn test_live_environment_publishes_live_rules() {
    let (site, public) = setup_site();
    let env: Environment = "live".parse().unwrap();
    let (store, sink) = store_for(&site, &public, env);

    store
        .save(&RobotsSettings {
            enabled: true,
            live_content: "User-agent: *\nDisallow:".into(),
            test_content: "Disallow: /admin".into(),
        })
        .unwrap();

    let robots = fs::read_to_string(public.join(ROBOTS_FILE_NAME)).unwrap();
    assert_eq!(robots, "User-agent: *\nDisallow:");
    assert!(sink.is_empty());
}

#[test]
fn test_unprovisioned_site_saves_but_reports() {
    let site = TempDir::new().unwrap();
    let public = site.path().join("public");
    // public/robots.txt was never provisioned
    let (store, sink) = store_for(&site, &public, Environment::Test);

    store.save(&RobotsSettings::default()).unwrap();

    // The record persisted even though synchronization failed
    assert!(store.path().is_file());
    assert!(!public.join(ROBOTS_FILE_NAME).exists());

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("does not exist"));
}

#[test]
fn test_settings_record_is_plain_toml() {
    let (site, public) = setup_site();
    let (store, _sink) = store_for(&site, &public, Environment::Dev);

    let saved = RobotsSettings {
        enabled: true,
        live_content: "User-agent: *".into(),
        test_content: String::new(),
    };
    store.save(&saved).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("enabled = true"));
    assert!(raw.contains("live_content"));

    // The record stays readable through the generic config store as well
    let reloaded: RobotsSettings = robots_fs::ConfigStore::new().load(store.path()).unwrap();
    assert_eq!(reloaded, saved);
}
