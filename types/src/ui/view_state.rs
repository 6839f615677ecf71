//! View state for rendering.
//!
//! Groups state that only matters for display, separating it from the
//! session and timeline state that drives application logic.

use std::time::Duration;

use super::{AnimPhase, ScreenTransition};
use crate::ExperienceKind;

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

#[derive(Debug)]
pub struct ViewState {
    /// Experience highlighted by the hub cursor.
    pub hub_cursor: ExperienceKind,
    pub transition: Option<ScreenTransition>,
    /// UI options (theme, motion, glyphs).
    pub ui_options: UiOptions,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            hub_cursor: ExperienceKind::VisualStrain,
            transition: None,
            ui_options: UiOptions::default(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    /// Advance the running transition, dropping it once it completes.
    pub fn advance_transition(&mut self, delta: Duration) {
        if let Some(transition) = self.transition.as_mut() {
            transition.advance(delta);
            if matches!(transition.phase(), AnimPhase::Completed) {
                self.transition = None;
            }
        }
    }

    /// Start a transition unless motion is reduced.
    pub fn play(&mut self, transition: ScreenTransition) {
        if self.ui_options.reduced_motion {
            self.transition = None;
        } else {
            self.transition = Some(transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{UiOptions, ViewState};
    use crate::ui::ScreenTransition;

    #[test]
    fn reduced_motion_suppresses_transitions() {
        let mut view = ViewState::new(UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        });
        view.play(ScreenTransition::settle(Duration::from_secs(1)));
        assert!(view.transition.is_none());

        let mut view = ViewState::new(UiOptions::default());
        view.play(ScreenTransition::settle(Duration::from_secs(1)));
        assert!(view.transition.is_some());
    }

    #[test]
    fn completed_transition_is_dropped() {
        let mut view = ViewState::new(UiOptions::default());
        view.play(ScreenTransition::settle(Duration::from_millis(500)));
        view.advance_transition(Duration::from_millis(200));
        assert!(view.transition.is_some());
        view.advance_transition(Duration::from_millis(400));
        assert!(view.transition.is_none());
    }
}
