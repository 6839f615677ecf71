//! The catalog of perspective experiences.
//!
//! Eight fixed kinds, each with static copy: a display label, an icon id,
//! the orientation line shown before the shift, and the reflection line
//! shown once the journey reaches integration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scripted simulation of a perceptual or cognitive limitation.
///
/// Declaration order is significant: it is the hub ordering used by
/// [`crate::hub_position`] and by the numeric hub shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceKind {
    VisualStrain,
    ColorPerception,
    FocusTunnel,
    ReadingStability,
    MemoryLoad,
    FocusDistraction,
    CognitiveLoad,
    InteractionPrecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown experience: {0:?}")]
pub struct UnknownExperienceError(pub String);

impl ExperienceKind {
    pub const COUNT: usize = 8;

    pub const ALL: [ExperienceKind; Self::COUNT] = [
        ExperienceKind::VisualStrain,
        ExperienceKind::ColorPerception,
        ExperienceKind::FocusTunnel,
        ExperienceKind::ReadingStability,
        ExperienceKind::MemoryLoad,
        ExperienceKind::FocusDistraction,
        ExperienceKind::CognitiveLoad,
        ExperienceKind::InteractionPrecision,
    ];

    /// Position within the fixed hub ordering (0..8).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`ExperienceKind::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The kind after this one in hub order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The kind before this one in hub order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ExperienceKind::VisualStrain => "visual-strain",
            ExperienceKind::ColorPerception => "color-perception",
            ExperienceKind::FocusTunnel => "focus-tunnel",
            ExperienceKind::ReadingStability => "reading-stability",
            ExperienceKind::MemoryLoad => "memory-load",
            ExperienceKind::FocusDistraction => "focus-distraction",
            ExperienceKind::CognitiveLoad => "cognitive-load",
            ExperienceKind::InteractionPrecision => "interaction-precision",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceKind::VisualStrain => "Visual Strain",
            ExperienceKind::ColorPerception => "Color Perception",
            ExperienceKind::FocusTunnel => "Focus Tunnel",
            ExperienceKind::ReadingStability => "Reading Stability",
            ExperienceKind::MemoryLoad => "Memory Load",
            ExperienceKind::FocusDistraction => "Focus Distraction",
            ExperienceKind::CognitiveLoad => "Cognitive Load",
            ExperienceKind::InteractionPrecision => "Interaction Precision",
        }
    }

    /// Symbol identifier for the kind's icon. Renderers map these to glyphs.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            ExperienceKind::VisualStrain => "eye.trianglebadge.exclamationmark",
            ExperienceKind::ColorPerception => "paintpalette",
            ExperienceKind::FocusTunnel => "scope",
            ExperienceKind::ReadingStability => "text.justify.left",
            ExperienceKind::MemoryLoad => "brain.head.profile",
            ExperienceKind::FocusDistraction => "bolt.ring.closed",
            ExperienceKind::CognitiveLoad => "square.stack.3d.up",
            ExperienceKind::InteractionPrecision => "hand.tap",
        }
    }

    #[must_use]
    pub const fn orientation_text(self) -> &'static str {
        match self {
            ExperienceKind::VisualStrain => {
                "Notice how clarity is often a privilege of high contrast and clean space."
            }
            ExperienceKind::ColorPerception => {
                "Observe how meaning can be lost when color becomes the only messenger."
            }
            ExperienceKind::FocusTunnel => {
                "Feel the narrowing of attention as the periphery fades away."
            }
            ExperienceKind::ReadingStability => {
                "Experience the effort of anchoring focus on shifting lines."
            }
            ExperienceKind::MemoryLoad => {
                "Witness the fragility of patterns under the weight of distraction."
            }
            ExperienceKind::FocusDistraction => {
                "Observe the quiet competition between intent and noise."
            }
            ExperienceKind::CognitiveLoad => {
                "Feel the build of mental density as instructions multiply."
            }
            ExperienceKind::InteractionPrecision => {
                "Notice the subtle drift between intent and interaction."
            }
        }
    }

    #[must_use]
    pub const fn reflection_text(self) -> &'static str {
        match self {
            ExperienceKind::VisualStrain => {
                "When UI density exceeds comfort, focus becomes fatigue."
            }
            ExperienceKind::ColorPerception => "True accessibility relies on more than just hue.",
            ExperienceKind::FocusTunnel => {
                "Context is easily lost when the viewport of attention narrows."
            }
            ExperienceKind::ReadingStability => "Stability is the foundation of comprehension.",
            ExperienceKind::MemoryLoad => {
                "Retention is a finite resource in a cluttered environment."
            }
            ExperienceKind::FocusDistraction => {
                "Motion commands attention; use it with intention."
            }
            ExperienceKind::CognitiveLoad => {
                "Simplicity is not a lack of complexity, but a mastery of it."
            }
            ExperienceKind::InteractionPrecision => {
                "Precision is a dialogue between the user and the system."
            }
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceKind {
    type Err = UnknownExperienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| UnknownExperienceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ExperienceKind;

    #[test]
    fn index_matches_declaration_order() {
        for (i, kind) in ExperienceKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(ExperienceKind::from_index(i), Some(kind));
        }
        assert_eq!(ExperienceKind::from_index(8), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(
            ExperienceKind::InteractionPrecision.next(),
            ExperienceKind::VisualStrain
        );
        assert_eq!(
            ExperienceKind::VisualStrain.prev(),
            ExperienceKind::InteractionPrecision
        );
        for kind in ExperienceKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
    }

    #[test]
    fn copy_tables_are_distinct_and_non_empty() {
        let labels: HashSet<_> = ExperienceKind::ALL.iter().map(|k| k.label()).collect();
        let icons: HashSet<_> = ExperienceKind::ALL.iter().map(|k| k.icon()).collect();
        assert_eq!(labels.len(), ExperienceKind::COUNT);
        assert_eq!(icons.len(), ExperienceKind::COUNT);
        for kind in ExperienceKind::ALL {
            assert!(!kind.orientation_text().is_empty());
            assert!(!kind.reflection_text().is_empty());
        }
    }

    #[test]
    fn parse_accepts_slug_and_label_forms() {
        assert_eq!(
            "memory-load".parse::<ExperienceKind>(),
            Ok(ExperienceKind::MemoryLoad)
        );
        assert_eq!(
            "Focus Tunnel".parse::<ExperienceKind>(),
            Ok(ExperienceKind::FocusTunnel)
        );
        assert_eq!(
            "cognitive_load".parse::<ExperienceKind>(),
            Ok(ExperienceKind::CognitiveLoad)
        );
        assert!("telepathy".parse::<ExperienceKind>().is_err());
    }

    #[test]
    fn serde_uses_slugs() {
        let json = serde_json::to_string(&ExperienceKind::ReadingStability).unwrap();
        assert_eq!(json, "\"reading-stability\"");
        assert!(serde_json::from_str::<ExperienceKind>("\"hand-tap\"").is_err());
        let parsed: ExperienceKind = serde_json::from_str("\"color-perception\"").unwrap();
        assert_eq!(parsed, ExperienceKind::ColorPerception);
    }
}
