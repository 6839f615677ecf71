//! Core engine for Perspective - session state machine and journey orchestration.
//!
//! This crate contains the App state machine without TUI dependencies. All
//! timing goes through a [`Clock`], so journeys can be driven on virtual time.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod app;
mod clock;
mod config;
mod scene;
mod scheduler;
mod session;
mod timeline;

pub use app::{App, JourneyView};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, AppSettings, ConfigError, PerspectiveConfig};
pub use scene::{DISTRACTOR_COUNT, JourneyScene, MEMORY_CELLS};
pub use scheduler::{Fired, Scheduler, TimelineToken};
pub use session::{FinishOutcome, SessionSnapshot, SessionState};
pub use timeline::{CueOutcome, JourneyTimeline};

pub use perspective_types::ui::UiOptions;
pub use perspective_types::{AppFlow, ExperienceKind, HubState, JourneyPhase};
