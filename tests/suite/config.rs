//! Config file resolution into app settings.

use std::fs;

use perspective_engine::{AppFlow, AppSettings, PerspectiveConfig, UiOptions};
use tempfile::TempDir;

use crate::common::app_with;

#[test]
fn config_file_drives_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = true\nreduced_motion = true\nskip_onboarding = true\n",
    )
    .unwrap();

    let config = PerspectiveConfig::load_from(&path).unwrap();
    let settings = AppSettings::from_config(config.as_ref());
    assert_eq!(
        settings.ui,
        UiOptions {
            ascii_only: true,
            high_contrast: false,
            reduced_motion: true,
        }
    );

    let (app, _clock) = app_with(settings);
    assert_eq!(app.flow(), AppFlow::Hub);
    assert!(app.ui_options().ascii_only);
}

#[test]
fn missing_file_means_defaults() {
    let dir = TempDir::new().unwrap();
    let config = PerspectiveConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(config.is_none());

    let (app, _clock) = app_with(AppSettings::from_config(config.as_ref()));
    assert_eq!(app.flow(), AppFlow::Onboarding);
}

#[test]
fn broken_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = ").unwrap();

    let err = PerspectiveConfig::load_from(&path).unwrap_err();
    assert_eq!(err.path(), &path);
}
