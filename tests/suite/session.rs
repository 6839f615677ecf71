//! Session state machine driven through the app.

use perspective_engine::{AppFlow, ExperienceKind, FinishOutcome, HubState, SessionState};

use crate::common::{complete_journey, hub_app};

#[test]
fn begin_focuses_every_kind() {
    for kind in ExperienceKind::ALL {
        let (mut app, _clock) = hub_app();
        assert!(app.select_experience(kind));
        assert_eq!(app.flow(), AppFlow::Journey(kind));
        assert_eq!(app.hub_state(), HubState::Focused(kind));
    }
}

#[test]
fn repeating_a_journey_does_not_grow_completed() {
    let (mut app, clock) = hub_app();
    complete_journey(&mut app, &clock, ExperienceKind::FocusTunnel);
    complete_journey(&mut app, &clock, ExperienceKind::FocusTunnel);
    assert_eq!(app.completed_count(), 1);
    assert_eq!(app.flow(), AppFlow::Hub);
    assert_eq!(app.hub_state(), HubState::Idle);
}

#[test]
fn synthesis_exactly_on_eighth_distinct_kind() {
    let (mut app, clock) = hub_app();
    // Repeat one kind along the way; only distinct kinds count.
    complete_journey(&mut app, &clock, ExperienceKind::MemoryLoad);
    complete_journey(&mut app, &clock, ExperienceKind::MemoryLoad);

    let remaining: Vec<_> = ExperienceKind::ALL
        .into_iter()
        .filter(|kind| *kind != ExperienceKind::MemoryLoad)
        .collect();
    let (last, rest) = remaining.split_last().unwrap();
    for kind in rest {
        complete_journey(&mut app, &clock, *kind);
        assert_eq!(app.flow(), AppFlow::Hub);
        assert_eq!(app.hub_state(), HubState::Idle);
    }
    assert_eq!(app.completed_count(), 7);

    complete_journey(&mut app, &clock, *last);
    assert_eq!(app.flow(), AppFlow::Synthesis);
    assert_eq!(app.completed_count(), ExperienceKind::COUNT);
}

#[test]
fn finish_without_begin_still_records() {
    let mut session = SessionState::new();
    assert_eq!(
        session.finish_journey(ExperienceKind::CognitiveLoad),
        FinishOutcome::ReturnedToHub { completed: 1 }
    );
    assert_eq!(session.flow(), AppFlow::Hub);
}

#[test]
fn subscribers_follow_journey_progress() {
    let (mut app, clock) = hub_app();
    let mut rx = app.subscribe();
    let kind = ExperienceKind::ReadingStability;

    app.select_experience(kind);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().hub_state, HubState::Focused(kind));

    crate::common::advance_to(&mut app, &clock, 20.0);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().hub_state, HubState::Immersed(kind));

    // Nothing changes between cues.
    crate::common::advance_to(&mut app, &clock, 25.0);
    assert!(!rx.has_changed().unwrap());

    crate::common::advance_to(&mut app, &clock, 35.0);
    app.reflect();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.flow, AppFlow::Hub);
    assert!(snapshot.completed.contains(&kind));
}
