//! Screen transition effects applied to the content area.

use ratatui::layout::Rect;

use perspective_types::ui::{ScreenTransition, TransitionKind};

/// Apply a screen transition to transform the content rectangle.
#[must_use]
pub fn apply_transition(transition: &ScreenTransition, base: Rect, viewport: Rect) -> Rect {
    match transition.kind() {
        TransitionKind::Settle => {
            let t = ease_out_cubic(transition.progress());
            let scale = 0.85 + 0.15 * t;
            scale_rect(base, scale)
        }
        TransitionKind::Rise => {
            let t = ease_out_cubic(transition.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom
                .saturating_sub(base_bottom)
                .max(base.height / 4);
            let offset = max_offset.min(8);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            let y = base.y.saturating_add(y_offset);
            let height = base.height.saturating_sub(y - base.y);
            Rect {
                x: base.x,
                y,
                width: base.width,
                height,
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
