use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};

use crate::theme::{Palette, styles};
use crate::{draw_centered_line, wrap_words};

const TITLE: &str = "See It Like Me";
const INTRO: &str = "Eight short experiences, each a brief look at how an interface can feel \
                     for someone else. Stay with each one until it settles, then reflect.";

pub(crate) fn draw(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = area.width.saturating_sub(8).min(60) as usize;
    let intro = wrap_words(INTRO, width);
    let block_height = intro.len() as u16 + 4;
    let mut y = area.y + area.height.saturating_sub(block_height) / 2;

    draw_centered_line(frame, area, y, Line::styled(TITLE, styles::title(palette)));
    y += 2;
    for line in intro {
        draw_centered_line(frame, area, y, Line::styled(line, styles::body(palette)));
        y += 1;
    }
    y += 1;

    let hint = Line::from(vec![
        Span::styled("Press ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" to begin", styles::key_hint(palette)),
    ]);
    draw_centered_line(frame, area, y, hint);
}
