//! Application state machine: session, active journey, and view state.
//!
//! `App` is the only writer of [`SessionState`]. User intents arrive as
//! method calls from the TUI; time arrives through [`App::tick`], which reads
//! the clock once and applies every scheduled cue that has come due.

use std::sync::Arc;
use std::time::Duration;

use perspective_types::ui::{ScreenTransition, UiOptions, ViewState};
use perspective_types::{AppFlow, ExperienceKind, HubState, JourneyPhase};
use tokio::sync::watch;

use crate::clock::{Clock, SystemClock};
use crate::config::AppSettings;
use crate::scene::JourneyScene;
use crate::scheduler::{Scheduler, TimelineToken};
use crate::session::{FinishOutcome, SessionSnapshot, SessionState};
use crate::timeline::{CueOutcome, JourneyTimeline};

const UI_TICK_INTERVAL: Duration = Duration::from_millis(100);
const ENTER_TRANSITION: Duration = Duration::from_millis(1000);
const FINISH_TRANSITION: Duration = Duration::from_millis(1200);
const EXIT_TRANSITION: Duration = Duration::from_millis(800);

#[derive(Debug)]
struct ActiveJourney {
    timeline: JourneyTimeline,
    scene: JourneyScene,
}

/// Everything a renderer needs to draw the active journey.
#[derive(Debug, Clone, Copy)]
pub struct JourneyView<'a> {
    pub kind: ExperienceKind,
    pub phase: JourneyPhase,
    /// Shift ramp in `[0, 1]`.
    pub progress: f64,
    pub elapsed: Duration,
    pub scene: &'a JourneyScene,
}

#[derive(Debug)]
pub struct App {
    session: SessionState,
    journey: Option<ActiveJourney>,
    scheduler: Scheduler<JourneyPhase>,
    clock: Arc<dyn Clock>,
    next_token: TimelineToken,
    view: ViewState,
    ui_tick: usize,
    last_ui_tick: Duration,
    last_frame: Duration,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock::new()))
    }

    /// Build an app driven by `clock`. Tests pass a [`crate::ManualClock`].
    #[must_use]
    pub fn with_clock(settings: AppSettings, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let mut app = Self {
            session: SessionState::new(),
            journey: None,
            scheduler: Scheduler::new(),
            clock,
            next_token: TimelineToken::new(1),
            view: ViewState::new(settings.ui),
            ui_tick: 0,
            last_ui_tick: now,
            last_frame: now,
            should_quit: false,
        };
        if settings.skip_onboarding {
            app.session.complete_onboarding();
        }
        app
    }

    /// Apply due cues and advance frame-rate independent animation state.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.drain_cues(now);

        // ~10Hz animation cadence, independent of render FPS.
        if now.saturating_sub(self.last_ui_tick) >= UI_TICK_INTERVAL {
            self.last_ui_tick = now;
            self.ui_tick = self.ui_tick.wrapping_add(1);
        }

        let delta = now.saturating_sub(self.last_frame);
        self.last_frame = now;
        self.view.advance_transition(delta);
    }

    fn drain_cues(&mut self, now: Duration) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            let Some(active) = self.journey.as_mut() else {
                tracing::trace!(
                    token = %fired.token,
                    phase = fired.event.as_str(),
                    "Discarded cue with no active journey"
                );
                continue;
            };
            match active
                .timeline
                .apply(&fired, &mut self.session, &mut self.scheduler)
            {
                CueOutcome::Applied(_) => {}
                outcome @ (CueOutcome::Stale | CueOutcome::OutOfOrder) => {
                    tracing::trace!(
                        token = %fired.token,
                        active = %active.timeline.token(),
                        phase = fired.event.as_str(),
                        ?outcome,
                        "Discarded journey cue"
                    );
                }
            }
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    // ---------------------------------------------------------------------
    // Session accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn flow(&self) -> AppFlow {
        self.session.flow()
    }

    #[must_use]
    pub fn hub_state(&self) -> HubState {
        self.session.hub_state()
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.session.completed().len()
    }

    #[must_use]
    pub fn is_completed(&self, kind: ExperienceKind) -> bool {
        self.session.is_completed(kind)
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.session.subscribe()
    }

    // ---------------------------------------------------------------------
    // View accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn transition(&self) -> Option<&ScreenTransition> {
        self.view.transition.as_ref()
    }

    #[must_use]
    pub fn hub_cursor(&self) -> ExperienceKind {
        self.view.hub_cursor
    }

    /// Animation tick counter (~10Hz).
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.ui_tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Number of cues still queued, across all timeline generations.
    #[must_use]
    pub fn pending_cues(&self) -> usize {
        self.scheduler.len()
    }

    #[must_use]
    pub fn journey_view(&self) -> Option<JourneyView<'_>> {
        let active = self.journey.as_ref()?;
        let now = self.clock.now();
        Some(JourneyView {
            kind: active.timeline.kind(),
            phase: active.timeline.phase(),
            progress: active.timeline.progress(now),
            elapsed: active.timeline.elapsed(now),
            scene: &active.scene,
        })
    }

    // ---------------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------------

    pub fn dismiss_onboarding(&mut self) {
        if self.session.complete_onboarding() {
            tracing::info!("Onboarding dismissed");
            self.view.play(ScreenTransition::settle(ENTER_TRANSITION));
        }
    }

    pub fn cursor_next(&mut self) {
        if self.flow() == AppFlow::Hub {
            self.view.hub_cursor = self.view.hub_cursor.next();
        }
    }

    pub fn cursor_prev(&mut self) {
        if self.flow() == AppFlow::Hub {
            self.view.hub_cursor = self.view.hub_cursor.prev();
        }
    }

    /// Start a journey from the hub. Returns `false` outside the hub.
    pub fn select_experience(&mut self, kind: ExperienceKind) -> bool {
        if self.flow() != AppFlow::Hub {
            return false;
        }
        self.view.hub_cursor = kind;
        self.start_journey(kind);
        true
    }

    pub fn select_at_cursor(&mut self) -> bool {
        self.select_experience(self.view.hub_cursor)
    }

    fn start_journey(&mut self, kind: ExperienceKind) {
        self.discard_journey();

        let token = self.next_token;
        self.next_token = token.next();
        let now = self.clock.now();

        self.session.begin_journey(kind);
        let timeline = JourneyTimeline::start(kind, token, now, &mut self.scheduler);
        self.journey = Some(ActiveJourney {
            timeline,
            scene: JourneyScene::random(),
        });
        self.view.play(ScreenTransition::settle(ENTER_TRANSITION));
        tracing::info!(kind = %kind, token = %token, "Journey started");
    }

    /// Leave the active journey without completing it.
    pub fn exit_journey(&mut self) -> bool {
        let Some(kind) = self.flow().journey_kind() else {
            return false;
        };
        self.discard_journey();
        self.session.exit_journey();
        self.view.play(ScreenTransition::settle(EXIT_TRANSITION));
        tracing::info!(kind = %kind, "Journey exited");
        true
    }

    /// Reflect is only available once the active journey is integrating.
    #[must_use]
    pub fn reflect_enabled(&self) -> bool {
        self.flow()
            .journey_kind()
            .is_some_and(|kind| self.hub_state().is_integrating(kind))
    }

    /// Complete the active journey. A no-op unless [`Self::reflect_enabled`].
    pub fn reflect(&mut self) -> bool {
        let Some(kind) = self.flow().journey_kind() else {
            return false;
        };
        if !self.hub_state().is_integrating(kind) {
            tracing::debug!(kind = %kind, hub_state = self.hub_state().as_str(), "Reflect ignored");
            return false;
        }

        self.discard_journey();
        match self.session.finish_journey(kind) {
            FinishOutcome::ReturnedToHub { completed } => {
                tracing::info!(kind = %kind, completed, "Journey finished");
            }
            FinishOutcome::ReachedSynthesis => {
                tracing::info!(kind = %kind, "Journey finished; all experiences completed");
            }
        }
        self.view.play(ScreenTransition::rise(FINISH_TRANSITION));
        true
    }

    /// The dock's shift-perspective control. Intentionally inert.
    pub fn shift_perspective(&mut self) {
        tracing::debug!(flow = self.flow().as_str(), "Shift perspective requested");
    }

    fn discard_journey(&mut self) {
        if let Some(active) = self.journey.take() {
            let token = active.timeline.token();
            let cancelled = self.scheduler.cancel(token);
            tracing::debug!(token = %token, cancelled, "Journey timeline discarded");
        }
    }
}
