//! Navigation and completion state for one run of the application.
//!
//! `SessionState` is the single writer for [`AppFlow`], [`HubState`] and the
//! completed set. Every mutation that changes something publishes a fresh
//! [`SessionSnapshot`] on a `watch` channel so views can react to changes
//! without polling the state itself.

use std::collections::BTreeSet;

use perspective_types::{AppFlow, ExperienceKind, HubState};
use tokio::sync::watch;

/// Immutable copy of the session published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub flow: AppFlow,
    pub hub_state: HubState,
    pub completed: BTreeSet<ExperienceKind>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

/// What `finish_journey` led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    ReturnedToHub { completed: usize },
    ReachedSynthesis,
}

#[derive(Debug)]
pub struct SessionState {
    flow: AppFlow,
    hub_state: HubState,
    completed: BTreeSet<ExperienceKind>,
    publisher: watch::Sender<SessionSnapshot>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(SessionSnapshot::default());
        Self {
            flow: AppFlow::default(),
            hub_state: HubState::default(),
            completed: BTreeSet::new(),
            publisher,
        }
    }

    #[must_use]
    pub fn flow(&self) -> AppFlow {
        self.flow
    }

    #[must_use]
    pub fn hub_state(&self) -> HubState {
        self.hub_state
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<ExperienceKind> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, kind: ExperienceKind) -> bool {
        self.completed.contains(&kind)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            flow: self.flow,
            hub_state: self.hub_state,
            completed: self.completed.clone(),
        }
    }

    /// Receiver that always holds the latest snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.publisher.subscribe()
    }

    /// Leave onboarding for the hub. Returns `false` outside onboarding.
    pub fn complete_onboarding(&mut self) -> bool {
        if self.flow != AppFlow::Onboarding {
            return false;
        }
        self.flow = AppFlow::Hub;
        self.hub_state = HubState::Idle;
        self.publish();
        true
    }

    pub fn begin_journey(&mut self, kind: ExperienceKind) {
        self.flow = AppFlow::Journey(kind);
        self.hub_state = HubState::Focused(kind);
        self.publish();
    }

    /// Record `kind` as completed and leave the journey.
    ///
    /// The synthesis check runs against the set after insertion, so the
    /// call that adds the eighth distinct kind is the one that moves on.
    pub fn finish_journey(&mut self, kind: ExperienceKind) -> FinishOutcome {
        self.completed.insert(kind);
        let outcome = if self.completed.len() == ExperienceKind::COUNT {
            self.flow = AppFlow::Synthesis;
            FinishOutcome::ReachedSynthesis
        } else {
            self.flow = AppFlow::Hub;
            self.hub_state = HubState::Idle;
            FinishOutcome::ReturnedToHub {
                completed: self.completed.len(),
            }
        };
        self.publish();
        outcome
    }

    /// Abandon the current journey without recording completion.
    pub fn exit_journey(&mut self) {
        self.flow = AppFlow::Hub;
        self.hub_state = HubState::Idle;
        self.publish();
    }

    /// Hub-state update from the journey timeline.
    ///
    /// Ignored unless the flow is a journey for the same kind, which keeps
    /// flow and hub state consistent even if a late cue slips through.
    pub(crate) fn set_hub_state(&mut self, state: HubState) -> bool {
        let consistent = match (self.flow.journey_kind(), state.kind()) {
            (Some(active), Some(kind)) => active == kind,
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if !consistent {
            return false;
        }
        if self.hub_state != state {
            self.hub_state = state;
            self.publish();
        }
        true
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}
