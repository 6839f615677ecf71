//! Closing screen once every experience has been completed.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

use perspective_engine::App;
use perspective_types::ExperienceKind;

use crate::draw_centered_line;
use crate::theme::{Glyphs, Palette, icon_glyph, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let options = app.ui_options();
    let rows = ExperienceKind::COUNT as u16;
    let block_height = rows + 6;
    let mut y = area.y + area.height.saturating_sub(block_height) / 2;

    draw_centered_line(frame, area, y, Line::styled("Synthesis", styles::title(palette)));
    y += 2;
    draw_centered_line(
        frame,
        area,
        y,
        Line::styled(
            "You have seen the interface through every perspective.",
            styles::body(palette),
        ),
    );
    y += 2;

    for kind in ExperienceKind::ALL {
        let mark = if app.is_completed(kind) {
            glyphs.completed
        } else {
            glyphs.dot_empty
        };
        let line = Line::from(vec![
            Span::styled(format!("{mark} "), styles::node_completed(palette)),
            Span::styled(
                format!("{} {}", icon_glyph(kind.icon(), options), kind.label()),
                styles::body(palette),
            ),
        ]);
        draw_centered_line(frame, area, y, line);
        y += 1;
    }
    y += 1;

    let hint = Line::from(vec![
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]);
    draw_centered_line(frame, area, y, hint);
}
