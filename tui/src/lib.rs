//! TUI rendering for Perspective using ratatui.

mod dock;
mod effects;
mod experiences;
mod hub;
mod input;
mod journey;
mod onboarding;
mod synthesis;
mod theme;

pub use effects::apply_transition;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, distractor_frame, glyphs, icon_glyph, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use perspective_engine::{App, AppFlow};

pub const DOCK_HEIGHT: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),              // Content
            Constraint::Length(DOCK_HEIGHT), // Dock
        ])
        .split(frame.area());

    let content = match app.transition() {
        Some(transition) => apply_transition(transition, chunks[0], frame.area()),
        None => chunks[0],
    };

    match app.flow() {
        AppFlow::Onboarding => onboarding::draw(frame, content, &palette),
        AppFlow::Hub => hub::draw(frame, app, content, &palette, &glyphs),
        AppFlow::Journey(_) => journey::draw(frame, app, content, &palette, &glyphs),
        AppFlow::Synthesis => synthesis::draw(frame, app, content, &palette, &glyphs),
    }

    dock::draw(frame, app, chunks[1], &palette, &glyphs);
}

/// Draw a single line horizontally centered on `y`, clipped to `area`.
pub(crate) fn draw_centered_line(frame: &mut Frame, area: Rect, y: u16, line: Line<'_>) {
    if y < area.y || y >= area.bottom() || area.width == 0 {
        return;
    }
    let width = (line.width() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap by display width.
pub(crate) fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if candidate > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Symmetric 0..1..0 oscillation over `period` UI ticks. Static at 1 when motion is reduced.
pub(crate) fn oscillation(tick: usize, period: usize, reduced_motion: bool) -> f64 {
    if reduced_motion || period == 0 {
        return 1.0;
    }
    let phase = (tick % period) as f64 / period as f64;
    (1.0 - (phase * std::f64::consts::TAU).cos()) / 2.0
}
