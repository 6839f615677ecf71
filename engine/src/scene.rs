//! Cosmetic seeds rolled once per journey.

pub const MEMORY_CELLS: usize = 9;
pub const DISTRACTOR_COUNT: usize = 12;

/// Random inputs for the memory grid and distraction overlays.
///
/// Nothing here affects timing or session state.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyScene {
    /// Lit cells of the 3×3 memory grid, row-major.
    pub memory_pattern: [bool; MEMORY_CELLS],
    /// Distractor offsets, each axis in `[-1, 1)` relative to the view center.
    pub distractors: Vec<(f32, f32)>,
}

impl JourneyScene {
    #[must_use]
    pub fn new(memory_pattern: [bool; MEMORY_CELLS], distractors: Vec<(f32, f32)>) -> Self {
        Self {
            memory_pattern,
            distractors,
        }
    }

    #[must_use]
    pub fn random() -> Self {
        let memory_pattern = std::array::from_fn(|_| rand::random::<bool>());
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|_| (unit_offset(), unit_offset()))
            .collect();
        Self {
            memory_pattern,
            distractors,
        }
    }

    #[must_use]
    pub fn lit_cells(&self) -> usize {
        self.memory_pattern.iter().filter(|lit| **lit).count()
    }
}

fn unit_offset() -> f32 {
    rand::random::<f32>().mul_add(2.0, -1.0)
}
