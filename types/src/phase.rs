//! Journey phases and the fixed schedule that drives them.
//!
//! The schedule is expressed as offsets from the journey's own start:
//!
//! ```text
//! 0s            5s                     20s                    35s
//! | orientation | shift (progress 0→1) | immersive            | integration ...
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const ORIENTATION_DURATION: Duration = Duration::from_secs(5);
pub const SHIFT_DURATION: Duration = Duration::from_secs(15);
pub const IMMERSIVE_DURATION: Duration = Duration::from_secs(15);

/// One of the four fixed stages of a journey, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyPhase {
    #[default]
    Orientation,
    Shift,
    Immersive,
    Integration,
}

impl JourneyPhase {
    /// The phase that follows this one. Integration is terminal.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            JourneyPhase::Orientation => Some(JourneyPhase::Shift),
            JourneyPhase::Shift => Some(JourneyPhase::Immersive),
            JourneyPhase::Immersive => Some(JourneyPhase::Integration),
            JourneyPhase::Integration => None,
        }
    }

    /// Offset from journey start at which this phase begins.
    #[must_use]
    pub fn starts_at(self) -> Duration {
        match self {
            JourneyPhase::Orientation => Duration::ZERO,
            JourneyPhase::Shift => ORIENTATION_DURATION,
            JourneyPhase::Immersive => ORIENTATION_DURATION + SHIFT_DURATION,
            JourneyPhase::Integration => {
                ORIENTATION_DURATION + SHIFT_DURATION + IMMERSIVE_DURATION
            }
        }
    }

    /// How long the phase lasts before the next one fires.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            JourneyPhase::Orientation => Some(ORIENTATION_DURATION),
            JourneyPhase::Shift => Some(SHIFT_DURATION),
            JourneyPhase::Immersive => Some(IMMERSIVE_DURATION),
            JourneyPhase::Integration => None,
        }
    }

    /// The phase the schedule prescribes `elapsed` after journey start.
    #[must_use]
    pub fn at(elapsed: Duration) -> Self {
        [
            JourneyPhase::Integration,
            JourneyPhase::Immersive,
            JourneyPhase::Shift,
        ]
        .into_iter()
        .find(|phase| elapsed >= phase.starts_at())
        .unwrap_or(JourneyPhase::Orientation)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JourneyPhase::Orientation => "orientation",
            JourneyPhase::Shift => "shift",
            JourneyPhase::Immersive => "immersive",
            JourneyPhase::Integration => "integration",
        }
    }
}

/// Linear shift ramp: 0.0 at shift start, 1.0 once the shift duration has elapsed.
#[must_use]
pub fn shift_progress(since_shift: Duration) -> f64 {
    (since_shift.as_secs_f64() / SHIFT_DURATION.as_secs_f64()).clamp(0.0, 1.0)
}
