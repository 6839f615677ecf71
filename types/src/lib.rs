//! Core domain types for Perspective.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod experience;
mod flow;
mod layout;
mod phase;
pub mod ui;

pub use experience::{ExperienceKind, UnknownExperienceError};
pub use flow::{AppFlow, HubState};
pub use layout::{Point, Size, hub_position, hub_positions};
pub use phase::{
    IMMERSIVE_DURATION, JourneyPhase, ORIENTATION_DURATION, SHIFT_DURATION, shift_progress,
};
