//! Scripted phase sequence for a single journey.
//!
//! A timeline owns no timers. Starting it schedules the shift cue on the
//! shared [`Scheduler`]; each cue that is applied schedules its successor at
//! `due + phase duration`. Because successors hang off the cue's due time
//! rather than the moment a driver noticed it, a coarse or late driver still
//! lands every phase on its exact offset.

use std::time::Duration;

use perspective_types::{ExperienceKind, HubState, JourneyPhase, shift_progress};

use crate::scheduler::{Fired, Scheduler, TimelineToken};
use crate::session::SessionState;

/// Result of offering a fired cue to a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueOutcome {
    Applied(JourneyPhase),
    /// Issued by a different timeline generation.
    Stale,
    /// Not the phase that follows the current one.
    OutOfOrder,
}

#[derive(Debug, Clone)]
pub struct JourneyTimeline {
    kind: ExperienceKind,
    token: TimelineToken,
    started_at: Duration,
    phase: JourneyPhase,
    shift_started: Option<Duration>,
}

impl JourneyTimeline {
    /// Begin at orientation and queue the first cue.
    pub fn start(
        kind: ExperienceKind,
        token: TimelineToken,
        now: Duration,
        scheduler: &mut Scheduler<JourneyPhase>,
    ) -> Self {
        let timeline = Self {
            kind,
            token,
            started_at: now,
            phase: JourneyPhase::Orientation,
            shift_started: None,
        };
        timeline.schedule_next(now, scheduler);
        timeline
    }

    #[must_use]
    pub fn kind(&self) -> ExperienceKind {
        self.kind
    }

    #[must_use]
    pub fn token(&self) -> TimelineToken {
        self.token
    }

    #[must_use]
    pub fn phase(&self) -> JourneyPhase {
        self.phase
    }

    #[must_use]
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    #[must_use]
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Shift ramp in `[0, 1]`. Zero before the shift cue, held at one after.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        self.shift_started
            .map_or(0.0, |since| shift_progress(now.saturating_sub(since)))
    }

    /// Apply a fired cue, advancing the phase and updating the session.
    ///
    /// Cues from another generation and cues that would skip or repeat a
    /// phase are rejected without touching any state.
    pub fn apply(
        &mut self,
        fired: &Fired<JourneyPhase>,
        session: &mut SessionState,
        scheduler: &mut Scheduler<JourneyPhase>,
    ) -> CueOutcome {
        if fired.token != self.token {
            return CueOutcome::Stale;
        }
        if self.phase.next() != Some(fired.event) {
            return CueOutcome::OutOfOrder;
        }

        self.phase = fired.event;
        match self.phase {
            JourneyPhase::Shift => self.shift_started = Some(fired.due),
            JourneyPhase::Immersive => {
                session.set_hub_state(HubState::Immersed(self.kind));
            }
            JourneyPhase::Integration => {
                session.set_hub_state(HubState::Integrating(self.kind));
            }
            JourneyPhase::Orientation => {}
        }
        self.schedule_next(fired.due, scheduler);

        tracing::debug!(
            kind = %self.kind,
            token = %self.token,
            phase = self.phase.as_str(),
            at = ?self.elapsed(fired.due),
            "Journey phase advanced"
        );
        CueOutcome::Applied(self.phase)
    }

    fn schedule_next(&self, from: Duration, scheduler: &mut Scheduler<JourneyPhase>) {
        if let (Some(next), Some(duration)) = (self.phase.next(), self.phase.duration()) {
            scheduler.schedule(self.token, from + duration, next);
        }
    }
}
