//! Terminal renditions of the eight experiences.
//!
//! Each rendition is a pure function of the shift `progress`, the journey's
//! scene seeds, and the UI tick. None of them feed back into engine state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use perspective_engine::{JourneyScene, JourneyView};
use perspective_types::ExperienceKind;
use perspective_types::ui::UiOptions;

use crate::theme::{Glyphs, Palette, distractor_frame, styles};
use crate::{centered_rect, draw_centered_line, oscillation};

const CONTEXT_TEXT: &str =
    "Important contextual information that provides meaning to the current task.";
const READING_TEXT: &str = "Continuous text requires a stable baseline. When elements shift, the cognitive cost of tracking increases significantly.";

/// Per-frame inputs shared by every rendition.
pub(crate) struct Canvas<'a> {
    pub palette: &'a Palette,
    pub glyphs: &'a Glyphs,
    pub options: UiOptions,
    pub tick: usize,
}

pub(crate) fn draw(frame: &mut Frame, area: Rect, view: &JourneyView<'_>, canvas: &Canvas<'_>) {
    let progress = view.progress.clamp(0.0, 1.0);
    match view.kind {
        ExperienceKind::VisualStrain => visual_strain(frame, area, progress, canvas),
        ExperienceKind::ColorPerception => color_perception(frame, area, progress, canvas),
        ExperienceKind::FocusTunnel => focus_tunnel(frame, area, progress, canvas),
        ExperienceKind::ReadingStability => reading_stability(frame, area, progress, canvas),
        ExperienceKind::MemoryLoad => memory_load(frame, area, progress, view.scene, canvas),
        ExperienceKind::FocusDistraction => {
            focus_distraction(frame, area, progress, view.scene, canvas);
        }
        ExperienceKind::CognitiveLoad => cognitive_load(frame, area, progress, canvas),
        ExperienceKind::InteractionPrecision => {
            interaction_precision(frame, area, progress, canvas);
        }
    }
}

/// Number of requirement lines shown by the cognitive load rendition.
pub(crate) fn requirement_count(progress: f64) -> usize {
    (5.0 + progress.clamp(0.0, 1.0) * 15.0) as usize
}

/// Visible and fully-clear radii of the focus tunnel, as fractions of the half-diagonal.
pub(crate) fn tunnel_radii(progress: f64) -> (f64, f64) {
    let clear = (100.0 - progress * 80.0) / 400.0;
    let visible = (400.0 - progress * 300.0) / 400.0;
    (clear, visible)
}

/// Blend an RGB color toward neutral gray by `amount` in `[0, 1]`.
pub(crate) fn desaturate(rgb: (u8, u8, u8), amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |c: u8| -> u8 {
        let c = f64::from(c);
        (c + (128.0 - c) * amount).round() as u8
    };
    Color::Rgb(mix(rgb.0), mix(rgb.1), mix(rgb.2))
}

fn visual_strain(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    let block_width = 3 + (progress * 2.0).round() as usize;
    let gap = if progress > 0.6 { 0 } else { 1 };
    let glyph = if progress > 0.5 {
        canvas.glyphs.block_full
    } else {
        canvas.glyphs.block_light
    };
    let mut style = Style::default().fg(if progress > 0.5 {
        canvas.palette.text_muted
    } else {
        canvas.palette.text_secondary
    });
    if progress > 0.3 {
        style = style.add_modifier(Modifier::DIM);
    }

    let cell = format!("{}{}", glyph.repeat(block_width), " ".repeat(gap));
    let row = cell.repeat(10);
    let rows = 15.min(area.height as usize);
    let row_gap = if progress > 0.5 { 0 } else { 1 };

    let mut lines = Vec::with_capacity(rows * 2);
    for _ in 0..rows {
        lines.push(Line::styled(row.clone(), style));
        for _ in 0..row_gap {
            lines.push(Line::raw(""));
        }
    }
    let height = (lines.len() as u16).min(area.height);
    let width = (row.width() as u16).min(area.width);
    frame.render_widget(Paragraph::new(lines), centered_rect(width, height, area));
}

fn color_perception(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    const SWATCHES: [(u8, u8, u8); 3] = [(255, 93, 98), (152, 187, 108), (126, 156, 216)];
    const SWATCH_WIDTH: u16 = 10;
    const SWATCH_HEIGHT: u16 = 4;
    const SPACING: u16 = 4;

    let total_width = SWATCH_WIDTH * 3 + SPACING * 2;
    let block = centered_rect(total_width, SWATCH_HEIGHT + 3, area);
    let outline = progress > 0.5;

    for (i, rgb) in SWATCHES.into_iter().enumerate() {
        let x = block.x + (SWATCH_WIDTH + SPACING) * i as u16;
        let rect = Rect::new(x, block.y, SWATCH_WIDTH, SWATCH_HEIGHT).intersection(area);
        let fill = desaturate(rgb, progress * 0.8);
        let fill_glyph = canvas.glyphs.block_full.repeat(rect.width as usize);
        let lines: Vec<Line> = (0..rect.height)
            .map(|row| {
                let edge = row == 0 || row + 1 == rect.height;
                if outline && edge {
                    Line::styled(
                        canvas.glyphs.block_light.repeat(rect.width as usize),
                        Style::default().fg(canvas.palette.text_primary),
                    )
                } else {
                    Line::styled(fill_glyph.clone(), Style::default().fg(fill))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    draw_centered_line(
        frame,
        area,
        block.y + SWATCH_HEIGHT + 2,
        Line::styled("Select the primary action", styles::title(canvas.palette)),
    );
}

fn focus_tunnel(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (clear, visible) = tunnel_radii(progress);
    let half_w = f64::from(area.width) / 2.0;
    let half_h = f64::from(area.height);
    let half_diag = half_w.hypot(half_h);

    let text: Vec<char> = CONTEXT_TEXT.chars().collect();
    let sharp = Style::default().fg(canvas.palette.text_secondary);
    let faded = Style::default()
        .fg(canvas.palette.text_muted)
        .add_modifier(Modifier::DIM);

    let buf = frame.buffer_mut();
    for row in 0..area.height {
        // Every other row carries text, echoing the original line spacing.
        if row % 2 == 1 {
            continue;
        }
        let dy = (f64::from(row) + 0.5) * 2.0 - half_h;
        for col in 0..area.width {
            let dx = f64::from(col) + 0.5 - half_w;
            let distance = dx.hypot(dy) / half_diag;
            let style = if distance <= clear {
                sharp
            } else if distance <= visible {
                faded
            } else {
                continue;
            };
            let ch = text[(col as usize + row as usize * 7) % text.len()];
            buf.set_string(area.x + col, area.y + row, ch.to_string(), style);
        }
    }
}

fn reading_stability(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    const INDENT: u16 = 6;
    const MAX_SHIFT: f64 = 4.0;

    let swing = oscillation(canvas.tick, 40, canvas.options.reduced_motion);
    let offset = (progress * MAX_SHIFT * swing).round() as u16;
    let style = Style::default().fg(canvas.palette.text_primary);

    let line_width = area.width.saturating_sub(INDENT * 2 + 8) as usize;
    let visible = 8.min(area.height as usize / 2);
    let top = area.y + (area.height.saturating_sub(visible as u16 * 2)) / 2;

    for i in 0..visible {
        let indent = if i % 2 == 0 {
            INDENT + offset
        } else {
            INDENT.saturating_sub(offset)
        };
        let text: String = READING_TEXT.chars().take(line_width).collect();
        let x = area.x + indent;
        let y = top + i as u16 * 2;
        let width = area.right().saturating_sub(x).min(text.width() as u16);
        if width == 0 || y >= area.bottom() {
            continue;
        }
        frame.render_widget(
            Paragraph::new(Line::styled(text, style)),
            Rect::new(x, y, width, 1),
        );
    }
}

fn memory_load(
    frame: &mut Frame,
    area: Rect,
    progress: f64,
    scene: &JourneyScene,
    canvas: &Canvas<'_>,
) {
    const CELL_WIDTH: u16 = 6;
    const CELL_HEIGHT: u16 = 2;

    let hidden = progress > 0.5;
    let blurred = progress > 0.7;
    let grid = centered_rect(CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 4, area);

    for (index, lit) in scene.memory_pattern.iter().enumerate() {
        let row = (index / 3) as u16;
        let col = (index % 3) as u16;
        let rect = Rect::new(
            grid.x + col * (CELL_WIDTH + 1),
            grid.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);

        let glyph = if blurred || !*lit {
            canvas.glyphs.block_light
        } else {
            canvas.glyphs.block_full
        };
        let style = if hidden {
            styles::dimmed(canvas.palette)
        } else if *lit {
            Style::default().fg(canvas.palette.text_primary)
        } else {
            Style::default().fg(canvas.palette.bg_border)
        };
        let fill = glyph.repeat(rect.width as usize);
        let lines: Vec<Line> = (0..rect.height)
            .map(|_| Line::styled(fill.clone(), style))
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    if hidden {
        draw_centered_line(
            frame,
            area,
            grid.bottom(),
            Line::styled("Recall the pattern", styles::body(canvas.palette)),
        );
    }
}

fn focus_distraction(
    frame: &mut Frame,
    area: Rect,
    progress: f64,
    scene: &JourneyScene,
    canvas: &Canvas<'_>,
) {
    let message_style = if progress > 0.8 {
        styles::dimmed(canvas.palette)
    } else if progress > 0.4 {
        Style::default().fg(canvas.palette.text_muted)
    } else {
        styles::title(canvas.palette)
    };

    if progress > 0.05 {
        let spread = oscillation(canvas.tick, 60, canvas.options.reduced_motion);
        let glyph = distractor_frame(canvas.tick, canvas.options);
        let mut style = Style::default().fg(canvas.palette.accent);
        if progress < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;
        let reach_x = f64::from(area.width) / 2.0 * 0.9;
        let reach_y = f64::from(area.height) / 2.0 * 0.9;

        let buf = frame.buffer_mut();
        for (dx, dy) in &scene.distractors {
            let x = (cx + f64::from(*dx) * spread * reach_x).floor();
            let y = (cy + f64::from(*dy) * spread * reach_y).floor();
            if x < f64::from(area.x)
                || y < f64::from(area.y)
                || x >= f64::from(area.right())
                || y >= f64::from(area.bottom())
            {
                continue;
            }
            buf.set_string(x as u16, y as u16, glyph, style);
        }
    }

    draw_centered_line(
        frame,
        area,
        area.y + area.height / 2,
        Line::styled("Focus on this core message", message_style),
    );
}

fn cognitive_load(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    let count = requirement_count(progress);
    let style = if progress > 0.5 {
        Style::default()
            .fg(canvas.palette.text_secondary)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(canvas.palette.text_secondary)
    };
    let info = if canvas.options.ascii_only { "(i)" } else { "ⓘ" };

    let lines: Vec<Line> = (0..count)
        .map(|i| {
            Line::from(vec![
                Span::styled(format!("{info} "), Style::default().fg(canvas.palette.accent)),
                Span::styled(
                    format!("Requirement #{i}: Ensure that all parameters are calibrated."),
                    style,
                ),
            ])
        })
        .collect();
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0) as u16;
    let rect = centered_rect(width, count as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn interaction_precision(frame: &mut Frame, area: Rect, progress: f64, canvas: &Canvas<'_>) {
    let drift = oscillation(canvas.tick, 30, canvas.options.reduced_motion);
    let width = (12.0 - progress * 6.0).round() as u16;
    let height = (width / 3).max(1);
    let dx = (progress * 3.0 * drift).round() as u16;
    let dy = (progress * 1.5 * drift).round() as u16;

    let base = centered_rect(width, height, area);
    let target = Rect {
        x: (base.x + dx).min(area.right().saturating_sub(base.width)),
        y: base.y.saturating_sub(dy).max(area.y),
        ..base
    };

    let fill_style = Style::default()
        .fg(canvas.palette.text_primary)
        .bg(canvas.palette.bg_highlight);
    let mid = target.height / 2;
    let lines: Vec<Line> = (0..target.height)
        .map(|row| {
            let label = if row == mid { "Tap" } else { "" };
            let pad = (target.width as usize).saturating_sub(label.len());
            let left = pad / 2;
            Line::styled(
                format!("{}{}{}", " ".repeat(left), label, " ".repeat(pad - left)),
                fill_style,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), target);

    if progress > 0.2 {
        let style = if progress > 0.6 {
            styles::body(canvas.palette)
        } else {
            styles::dimmed(canvas.palette)
        };
        draw_centered_line(
            frame,
            area,
            base.bottom() + 3,
            Line::styled(
                format!("{} Targets are shrinking and shifting.", canvas.glyphs.target),
                style,
            ),
        );
    }
}
