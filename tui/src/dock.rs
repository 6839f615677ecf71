//! Bottom dock: context indicator, completion dots, Reflect, shift perspective.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use perspective_engine::{App, AppFlow};
use perspective_types::ExperienceKind;

use crate::theme::{Glyphs, Palette, icon_glyph, styles};

/// Icon identifier and label for the context indicator.
pub(crate) fn context(flow: AppFlow) -> (&'static str, &'static str) {
    match flow {
        AppFlow::Hub => ("square.grid.2x2", "The Hub"),
        AppFlow::Journey(kind) => (kind.icon(), kind.label()),
        AppFlow::Synthesis => ("sparkles", "Synthesis"),
        AppFlow::Onboarding => ("circle", ""),
    }
}

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let options = app.ui_options();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Context
            Constraint::Min(1),     // Progress dots
            Constraint::Length(18), // Reflect + shift
        ])
        .split(inner);

    let (icon, label) = context(app.flow());
    let indicator = Line::from(vec![
        Span::styled(format!(" {} ", icon_glyph(icon, options)), styles::body(palette)),
        Span::styled(label, styles::key_hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(indicator), chunks[0]);

    let completed = app.completed_count();
    let dots: Vec<Span> = (0..ExperienceKind::COUNT)
        .map(|i| {
            if i < completed {
                Span::styled(format!("{} ", glyphs.dot_filled), styles::title(palette))
            } else {
                Span::styled(format!("{} ", glyphs.dot_empty), styles::dimmed(palette))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[1],
    );

    let reflect_style = if app.reflect_enabled() {
        styles::reflect_enabled(palette)
    } else {
        styles::reflect_disabled(palette)
    };
    let controls = Line::from(vec![
        Span::styled(format!(" {} Reflect ", glyphs.reflect), reflect_style),
        Span::raw("  "),
        Span::styled(glyphs.shift, styles::key_hint(palette)),
        Span::raw(" "),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Right),
        chunks[2],
    );
}
