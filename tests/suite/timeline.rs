//! Journey schedule on virtual time.

use perspective_engine::{App, ExperienceKind, HubState, JourneyPhase};

use crate::common::{advance_to, hub_app};

fn phase(app: &App) -> Option<JourneyPhase> {
    app.journey_view().map(|view| view.phase)
}

fn progress(app: &App) -> f64 {
    app.journey_view().map_or(f64::NAN, |view| view.progress)
}

#[test]
fn schedule_on_simulated_clock() {
    let (mut app, clock) = hub_app();
    let kind = ExperienceKind::FocusDistraction;
    app.select_experience(kind);

    advance_to(&mut app, &clock, 0.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Orientation));
    assert!(progress(&app).abs() < f64::EPSILON);

    advance_to(&mut app, &clock, 5.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Shift));
    assert!(progress(&app).abs() < f64::EPSILON);

    advance_to(&mut app, &clock, 12.5);
    assert!((progress(&app) - 0.5).abs() < 1e-6);
    assert_eq!(app.hub_state(), HubState::Focused(kind));

    advance_to(&mut app, &clock, 20.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Immersive));
    assert_eq!(app.hub_state(), HubState::Immersed(kind));

    advance_to(&mut app, &clock, 35.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Integration));
    assert_eq!(app.hub_state(), HubState::Integrating(kind));
    assert_eq!(app.pending_cues(), 0);

    let before = app.session().snapshot();
    advance_to(&mut app, &clock, 600.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Integration));
    assert_eq!(app.session().snapshot(), before);
    assert!((progress(&app) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn coarse_ticks_do_not_drift() {
    let (mut app, clock) = hub_app();
    let kind = ExperienceKind::VisualStrain;
    app.select_experience(kind);

    // A driver that only wakes up every 7 seconds still sees the exact ramp.
    advance_to(&mut app, &clock, 7.0);
    assert!((progress(&app) - 2.0 / 15.0).abs() < 1e-6);
    advance_to(&mut app, &clock, 14.0);
    assert!((progress(&app) - 9.0 / 15.0).abs() < 1e-6);
    advance_to(&mut app, &clock, 21.0);
    assert_eq!(app.hub_state(), HubState::Immersed(kind));
    advance_to(&mut app, &clock, 42.0);
    assert_eq!(app.hub_state(), HubState::Integrating(kind));
}

#[test]
fn journey_started_later_uses_its_own_start() {
    let (mut app, clock) = hub_app();
    advance_to(&mut app, &clock, 100.0);
    let kind = ExperienceKind::ColorPerception;
    app.select_experience(kind);

    advance_to(&mut app, &clock, 119.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Shift));
    advance_to(&mut app, &clock, 120.0);
    assert_eq!(phase(&app), Some(JourneyPhase::Immersive));
}

#[test]
fn cancelled_journey_never_touches_new_one() {
    let (mut app, clock) = hub_app();
    let old = ExperienceKind::MemoryLoad;
    let new = ExperienceKind::InteractionPrecision;

    app.select_experience(old);
    advance_to(&mut app, &clock, 10.0);
    assert!(app.exit_journey());
    assert!(app.select_experience(new));
    assert_eq!(app.pending_cues(), 1);

    // Old journey's immersive mark.
    advance_to(&mut app, &clock, 20.0);
    assert_eq!(app.hub_state(), HubState::Focused(new));
    assert_eq!(phase(&app), Some(JourneyPhase::Shift));

    // Old journey's integration mark; the new one is immersed (started at 10).
    advance_to(&mut app, &clock, 35.0);
    assert_eq!(app.hub_state(), HubState::Immersed(new));
    assert!(!app.reflect_enabled());

    advance_to(&mut app, &clock, 45.0);
    assert_eq!(app.hub_state(), HubState::Integrating(new));
}

#[test]
fn exit_then_idle_hub_stays_idle() {
    let (mut app, clock) = hub_app();
    app.select_experience(ExperienceKind::CognitiveLoad);
    advance_to(&mut app, &clock, 19.0);
    app.exit_journey();

    advance_to(&mut app, &clock, 50.0);
    assert_eq!(app.hub_state(), HubState::Idle);
    assert!(app.journey_view().is_none());
    assert_eq!(app.pending_cues(), 0);
}

#[test]
fn phase_trace() {
    let (mut app, clock) = hub_app();
    app.select_experience(ExperienceKind::MemoryLoad);

    let mut trace = Vec::new();
    for secs in [0.0, 4.9, 5.0, 12.5, 19.9, 20.0, 34.9, 35.0, 60.0] {
        advance_to(&mut app, &clock, secs);
        let view = app.journey_view().unwrap();
        trace.push(format!(
            "t={secs:.1} phase={} progress={:.2} hub={}",
            view.phase.as_str(),
            view.progress,
            app.hub_state().as_str()
        ));
    }

    insta::assert_snapshot!(trace.join("\n"), @r"
t=0.0 phase=orientation progress=0.00 hub=focused
t=4.9 phase=orientation progress=0.00 hub=focused
t=5.0 phase=shift progress=0.00 hub=focused
t=12.5 phase=shift progress=0.50 hub=focused
t=19.9 phase=shift progress=0.99 hub=focused
t=20.0 phase=immersive progress=1.00 hub=immersed
t=34.9 phase=immersive progress=1.00 hub=immersed
t=35.0 phase=integration progress=1.00 hub=integrating
t=60.0 phase=integration progress=1.00 hub=integrating
");
}
