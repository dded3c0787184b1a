//! Paints command lists into the terminal buffer.
//!
//! Page units map onto cells directly: one unit per column, one text
//! line (20 units) per row. Commands are pre-culled by the views, so
//! this pass only clips against the target area.

use folio_protocol::{LINE_HEIGHT, RenderCommand, TextAlign, TextStyle, ThemeMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::theme;

/// Paint `commands` into `area`, offset vertically by `scroll_y` page
/// units. Fixed overlays pass zero.
pub fn paint(
    buf: &mut Buffer,
    area: Rect,
    commands: &[RenderCommand],
    mode: ThemeMode,
    scroll_y: f64,
) {
    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect { rect, fill, border } => {
                let r0 = row(rect.y, scroll_y);
                let c0 = col(rect.x);
                let rows = ((rect.h / LINE_HEIGHT).round() as i32).max(1);
                let cols = (rect.w.round() as i32).max(1);
                let fill_color = fill.map(|t| theme::resolve(t, mode));
                let border_color = border.map(|t| theme::resolve(t, mode));

                for dr in 0..rows {
                    for dc in 0..cols {
                        let Some((x, y)) = cell(area, c0 + dc, r0 + dr) else {
                            continue;
                        };
                        if let Some(bg) = fill_color {
                            buf[(x, y)].set_bg(bg);
                        }
                        if let Some(fg) = border_color {
                            let edge = edge_char(dr, dc, rows, cols);
                            if let Some(ch) = edge {
                                buf[(x, y)].set_char(ch).set_fg(fg);
                            }
                        }
                    }
                }
            }
            RenderCommand::DrawText { position, text, color, style, align } => {
                let r = row(position.y, scroll_y);
                let len = text.chars().count() as i32;
                let start = match align {
                    TextAlign::Left => col(position.x),
                    TextAlign::Center => col(position.x) - len / 2,
                    TextAlign::Right => col(position.x) - len,
                };
                let fg = theme::resolve(*color, mode);
                let bold = matches!(
                    style,
                    TextStyle::Display | TextStyle::Title | TextStyle::Heading | TextStyle::Emphasis
                );
                for (i, ch) in text.chars().enumerate() {
                    let Some((x, y)) = cell(area, start + i as i32, r) else {
                        continue;
                    };
                    let target = &mut buf[(x, y)];
                    target.set_char(ch).set_fg(fg);
                    if bold {
                        target.set_style(Style::default().add_modifier(Modifier::BOLD));
                    }
                }
            }
            RenderCommand::DrawLine { from, to, color, .. } => {
                let fg = theme::resolve(*color, mode);
                if (from.x - to.x).abs() < f64::EPSILON {
                    let c = col(from.x);
                    let (r0, r1) = ordered(row(from.y, scroll_y), row(to.y, scroll_y));
                    for r in r0..=r1 {
                        if let Some((x, y)) = cell(area, c, r) {
                            buf[(x, y)].set_char('\u{2502}').set_fg(fg);
                        }
                    }
                } else if (from.y - to.y).abs() < f64::EPSILON {
                    let r = row(from.y, scroll_y);
                    let (c0, c1) = ordered(col(from.x), col(to.x));
                    for c in c0..=c1 {
                        if let Some((x, y)) = cell(area, c, r) {
                            buf[(x, y)].set_char('\u{2500}').set_fg(fg);
                        }
                    }
                }
                // Diagonals are never emitted.
            }
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

fn row(y: f64, scroll_y: f64) -> i32 {
    ((y - scroll_y) / LINE_HEIGHT).floor() as i32
}

fn col(x: f64) -> i32 {
    x.floor() as i32
}

/// Area-relative cell lookup, rejecting anything out of bounds.
fn cell(area: Rect, c: i32, r: i32) -> Option<(u16, u16)> {
    if c < 0 || r < 0 {
        return None;
    }
    let (c, r) = (c as u16, r as u16);
    if c >= area.width || r >= area.height {
        return None;
    }
    Some((area.x + c, area.y + r))
}

fn edge_char(dr: i32, dc: i32, rows: i32, cols: i32) -> Option<char> {
    let top = dr == 0;
    let bottom = dr == rows - 1;
    let left = dc == 0;
    let right = dc == cols - 1;
    match (top || bottom, left || right) {
        (true, true) => Some(corner(top, left)),
        (true, false) => Some('\u{2500}'),
        (false, true) => Some('\u{2502}'),
        (false, false) => None,
    }
}

fn corner(top: bool, left: bool) -> char {
    match (top, left) {
        (true, true) => '\u{250c}',
        (true, false) => '\u{2510}',
        (false, true) => '\u{2514}',
        (false, false) => '\u{2518}',
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}
