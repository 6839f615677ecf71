//! Journey screen: the active experience plus phase overlays.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use perspective_engine::{App, JourneyPhase};

use crate::experiences::{self, Canvas};
use crate::theme::{Glyphs, Palette, styles};
use crate::{centered_rect, draw_centered_line, wrap_words};

const OVERLAY_MAX_WIDTH: u16 = 64;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(view) = app.journey_view() else {
        return;
    };

    let canvas = Canvas {
        palette,
        glyphs,
        options: app.ui_options(),
        tick: app.tick_count(),
    };
    experiences::draw(frame, area, &view, &canvas);

    match view.phase {
        JourneyPhase::Orientation => {
            // Content sits behind the orientation text, washed out.
            frame
                .buffer_mut()
                .set_style(area, Style::default().fg(palette.text_disabled));
            draw_orientation(
                frame,
                area,
                view.kind.label(),
                view.kind.orientation_text(),
                palette,
            );
        }
        JourneyPhase::Integration => {
            draw_reflection(frame, area, view.kind.reflection_text(), palette);
        }
        JourneyPhase::Shift | JourneyPhase::Immersive => {}
    }

    let back = Line::from(vec![
        Span::styled(format!("{} Back", glyphs.back), styles::title(palette)),
        Span::styled(" (Esc)", styles::key_hint(palette)),
    ]);
    let width = (back.width() as u16).min(area.width.saturating_sub(2));
    if area.height > 1 && width > 0 {
        frame.render_widget(
            Paragraph::new(back),
            Rect::new(area.x + 2, area.y + 1, width, 1),
        );
    }
}

fn draw_orientation(frame: &mut Frame, area: Rect, label: &str, text: &str, palette: &Palette) {
    let width = OVERLAY_MAX_WIDTH.min(area.width.saturating_sub(4));
    let wrapped = wrap_words(text, width as usize);
    let height = wrapped.len() as u16 + 2;
    let rect = centered_rect(width, height, area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_dark)),
        rect,
    );
    draw_centered_line(
        frame,
        rect,
        rect.y,
        Line::styled(label.to_string(), styles::title(palette)),
    );
    for (i, line) in wrapped.into_iter().enumerate() {
        draw_centered_line(
            frame,
            rect,
            rect.y + 2 + i as u16,
            Line::styled(line, styles::body(palette)),
        );
    }
}

fn draw_reflection(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let inner_width = OVERLAY_MAX_WIDTH.min(area.width.saturating_sub(8));
    let wrapped = wrap_words(text, inner_width as usize);
    let width = inner_width + 4;
    let height = wrapped.len() as u16 + 2;
    if area.height < height + 1 {
        return;
    }

    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.bottom() - height - 1,
        width: width.min(area.width),
        height,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    for (i, line) in wrapped.into_iter().enumerate() {
        draw_centered_line(
            frame,
            inner,
            inner.y + i as u16,
            Line::styled(line, styles::body(palette).add_modifier(Modifier::ITALIC)),
        );
    }
}
