//! Screen transition effects played when the top-level flow changes.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Content fades in while scaling up slightly toward full size.
    Settle,
    /// Content rises from the bottom edge.
    Rise,
}

#[derive(Debug, Clone)]
pub struct ScreenTransition {
    kind: TransitionKind,
    timer: EffectTimer,
}

impl ScreenTransition {
    #[must_use]
    pub fn settle(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Settle,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn rise(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Rise,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }
}
