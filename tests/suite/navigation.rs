//! Navigation rules and the key bindings that drive them.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use perspective_engine::{AppFlow, ExperienceKind, HubState};
use perspective_tui::apply_event;

use crate::common::{advance_by, advance_to, fresh_app, hub_app};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn reflect_is_noop_until_integration() {
    let (mut app, clock) = hub_app();
    let kind = ExperienceKind::CognitiveLoad;
    app.select_experience(kind);

    for secs in [0.0, 6.0, 19.0, 21.0, 34.0] {
        advance_to(&mut app, &clock, secs);
        assert!(!app.reflect_enabled());
        assert!(!app.reflect());
        assert_eq!(app.flow(), AppFlow::Journey(kind));
        assert_eq!(app.completed_count(), 0);
    }

    advance_to(&mut app, &clock, 35.0);
    assert!(app.reflect_enabled());
    assert!(app.reflect());
    assert!(app.is_completed(kind));
}

#[test]
fn exit_returns_to_idle_hub_without_completion() {
    let (mut app, clock) = hub_app();
    app.select_experience(ExperienceKind::FocusTunnel);
    advance_to(&mut app, &clock, 36.0);
    assert!(app.exit_journey());

    assert_eq!(app.flow(), AppFlow::Hub);
    assert_eq!(app.hub_state(), HubState::Idle);
    assert_eq!(app.completed_count(), 0);
    assert!(!app.exit_journey());
}

#[test]
fn selection_is_ignored_outside_hub() {
    let (mut app, _clock) = fresh_app();
    assert!(!app.select_experience(ExperienceKind::VisualStrain));
    assert_eq!(app.flow(), AppFlow::Onboarding);

    app.dismiss_onboarding();
    app.select_experience(ExperienceKind::VisualStrain);
    assert!(!app.select_experience(ExperienceKind::MemoryLoad));
    assert_eq!(app.flow(), AppFlow::Journey(ExperienceKind::VisualStrain));
}

#[test]
fn shift_perspective_changes_nothing() {
    let (mut app, clock) = hub_app();
    app.select_experience(ExperienceKind::ReadingStability);
    advance_to(&mut app, &clock, 8.0);
    let before = app.session().snapshot();

    apply_event(&mut app, press(KeyCode::Char('p')));
    assert_eq!(app.session().snapshot(), before);
}

#[test]
fn keyboard_walkthrough() {
    let (mut app, clock) = fresh_app();

    apply_event(&mut app, press(KeyCode::Enter));
    assert_eq!(app.flow(), AppFlow::Hub);

    // Cursor starts on the first node; two steps right lands on the third.
    apply_event(&mut app, press(KeyCode::Right));
    apply_event(&mut app, press(KeyCode::Right));
    assert_eq!(app.hub_cursor(), ExperienceKind::FocusTunnel);
    apply_event(&mut app, press(KeyCode::Enter));
    assert_eq!(app.flow(), AppFlow::Journey(ExperienceKind::FocusTunnel));

    // Too early to reflect.
    apply_event(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.flow(), AppFlow::Journey(ExperienceKind::FocusTunnel));

    advance_by(&mut app, &clock, 35.0);
    apply_event(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.flow(), AppFlow::Hub);
    assert!(app.is_completed(ExperienceKind::FocusTunnel));

    // Number keys jump straight into a journey; Esc backs out.
    apply_event(&mut app, press(KeyCode::Char('5')));
    assert_eq!(app.flow(), AppFlow::Journey(ExperienceKind::MemoryLoad));
    apply_event(&mut app, press(KeyCode::Esc));
    assert_eq!(app.flow(), AppFlow::Hub);
    assert_eq!(app.completed_count(), 1);

    assert!(apply_event(&mut app, press(KeyCode::Char('q'))));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let (mut app, _clock) = hub_app();
    app.select_experience(ExperienceKind::ColorPerception);
    let quit = apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(quit);
}
