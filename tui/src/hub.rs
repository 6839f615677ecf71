//! Circular hub of all experiences.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use perspective_engine::App;
use perspective_types::{ExperienceKind, Size, hub_position};

use crate::draw_centered_line;
use crate::theme::{Glyphs, Palette, icon_glyph, styles};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Cell position of an experience node within `area`.
pub(crate) fn node_cell(kind: ExperienceKind, area: Rect) -> (u16, u16) {
    let viewport = Size::new(f64::from(area.width), f64::from(area.height) * CELL_ASPECT);
    let point = hub_position(kind, viewport);
    let x = area.x + (point.x.round() as u16).min(area.width.saturating_sub(1));
    let y = area.y + ((point.y / CELL_ASPECT).round() as u16).min(area.height.saturating_sub(1));
    (x, y)
}

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let options = app.ui_options();

    if app.hub_state().is_idle() {
        draw_centered_line(
            frame,
            area,
            area.y + 1,
            Line::styled("Select a perspective to begin", styles::body(palette)),
        );
    }

    for kind in ExperienceKind::ALL {
        let (cx, cy) = node_cell(kind, area);
        let selected = app.hub_cursor() == kind;
        let completed = app.is_completed(kind);

        let style = if selected {
            styles::node_selected(palette)
        } else if completed {
            styles::node_completed(palette)
        } else {
            styles::node(palette)
        };

        let mut text = format!(" {} {} ", icon_glyph(kind.icon(), options), kind.label());
        if completed {
            text.push_str(glyphs.completed);
            text.push(' ');
        }
        let width = (text.width() as u16).min(area.width);
        let half = width / 2;
        let max_x = area.right().saturating_sub(width);
        let x = cx.saturating_sub(half).clamp(area.x, max_x.max(area.x));

        let mut spans = Vec::with_capacity(2);
        if selected {
            spans.push(Span::styled(glyphs.selected, styles::key_highlight(palette)));
        }
        spans.push(Span::styled(text, style));
        let line = Line::from(spans);
        let width = (line.width() as u16).min(area.right().saturating_sub(x));
        frame.render_widget(Paragraph::new(line), Rect::new(x, cy, width, 1));
    }

    let hint = Line::from(vec![
        Span::styled("←/→", styles::key_highlight(palette)),
        Span::styled(" move  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" begin  ", styles::key_hint(palette)),
        Span::styled("1-8", styles::key_highlight(palette)),
        Span::styled(" jump  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]);
    draw_centered_line(frame, area, area.bottom().saturating_sub(1), hint);
}
