//! Shared test utilities and fixtures
//!
//! Apps here run on a [`ManualClock`], so journeys advance only when a test
//! moves time forward.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use perspective_engine::{App, AppSettings, ExperienceKind, ManualClock, UiOptions};

/// App that starts at the hub, with a handle to its clock.
pub fn hub_app() -> (App, ManualClock) {
    app_with(AppSettings {
        skip_onboarding: true,
        ..AppSettings::default()
    })
}

/// App that starts at onboarding.
pub fn fresh_app() -> (App, ManualClock) {
    app_with(AppSettings::default())
}

pub fn app_with_ui(ui: UiOptions) -> (App, ManualClock) {
    app_with(AppSettings {
        ui,
        skip_onboarding: true,
    })
}

pub fn app_with(settings: AppSettings) -> (App, ManualClock) {
    let clock = ManualClock::new();
    let app = App::with_clock(settings, Arc::new(clock.clone()));
    (app, clock)
}

/// Move the clock to `secs` and let the app catch up.
pub fn advance_to(app: &mut App, clock: &ManualClock, secs: f64) {
    clock.set_secs(secs);
    app.tick();
}

/// Move the clock forward by `secs` and let the app catch up.
pub fn advance_by(app: &mut App, clock: &ManualClock, secs: f64) {
    clock.advance(Duration::from_secs_f64(secs));
    app.tick();
}

/// Run a whole journey from the hub and reflect on it.
pub fn complete_journey(app: &mut App, clock: &ManualClock, kind: ExperienceKind) {
    assert!(app.select_experience(kind), "journey must start from the hub");
    advance_by(app, clock, 35.0);
    assert!(app.reflect(), "reflect must be enabled after integration");
}
