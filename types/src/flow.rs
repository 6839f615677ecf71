//! Navigation state: which top-level screen is shown, and the hub sub-state.

use serde::{Deserialize, Serialize};

use crate::ExperienceKind;

/// Top-level screen selection. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "screen", content = "kind", rename_all = "kebab-case")]
pub enum AppFlow {
    #[default]
    Onboarding,
    Hub,
    Journey(ExperienceKind),
    Synthesis,
}

impl AppFlow {
    /// The kind being journeyed, if the journey screen is active.
    #[must_use]
    pub fn journey_kind(self) -> Option<ExperienceKind> {
        match self {
            AppFlow::Journey(kind) => Some(kind),
            AppFlow::Onboarding | AppFlow::Hub | AppFlow::Synthesis => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppFlow::Onboarding => "onboarding",
            AppFlow::Hub => "hub",
            AppFlow::Journey(_) => "journey",
            AppFlow::Synthesis => "synthesis",
        }
    }
}

/// Sub-state while inside or approaching a journey.
///
/// When the flow is `Journey(k)`, any kind carried here is `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind", rename_all = "kebab-case")]
pub enum HubState {
    #[default]
    Idle,
    Focused(ExperienceKind),
    Immersed(ExperienceKind),
    Integrating(ExperienceKind),
}

impl HubState {
    #[must_use]
    pub fn kind(self) -> Option<ExperienceKind> {
        match self {
            HubState::Idle => None,
            HubState::Focused(kind) | HubState::Immersed(kind) | HubState::Integrating(kind) => {
                Some(kind)
            }
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, HubState::Idle)
    }

    #[must_use]
    pub fn is_focused_on(self, kind: ExperienceKind) -> bool {
        self == HubState::Focused(kind)
    }

    #[must_use]
    pub fn is_integrating(self, kind: ExperienceKind) -> bool {
        self == HubState::Integrating(kind)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HubState::Idle => "idle",
            HubState::Focused(_) => "focused",
            HubState::Immersed(_) => "immersed",
            HubState::Integrating(_) => "integrating",
        }
    }
}
