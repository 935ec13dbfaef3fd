#![forbid(unsafe_code)]

//! Drawing helpers: text spans, truncation, word wrap, and ellipse plots.

use orbit_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::style::Style;

/// Display width of a string in terminal columns.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn character. Stops at `max_x`
/// (exclusive); a wide grapheme that would straddle `max_x` is not drawn.
pub fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = buf.get(x, y).copied().unwrap_or_default();
            cell.content = Cell::from_char(c).content;
            style.apply(&mut cell);
            buf.set(x, y, cell);
            for dx in 1..w as u16 {
                let mut cont = Cell::CONTINUATION;
                style.apply(&mut cont);
                buf.set(x + dx, y, cont);
            }
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Truncate `text` to at most `max_width` columns, appending `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = display_width(grapheme);
        if used + w + 1 > max_width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Draw `text` centered horizontally within `area` on row `y`, truncated to fit.
///
/// Returns the rectangle the text occupies.
pub fn draw_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) -> Rect {
    let text = truncate_to_width(text, area.width as usize);
    let w = display_width(&text) as u16;
    let x = area.x + (area.width - w) / 2;
    draw_text_span(buf, x, y, &text, style, area.right());
    Rect::new(x, y, w, 1)
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_w = 0;
        for word in paragraph.split_whitespace() {
            let word_w = display_width(word);
            if line_w > 0 && line_w + 1 + word_w > width {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            if word_w > width {
                for grapheme in word.graphemes(true) {
                    let gw = display_width(grapheme);
                    if line_w + gw > width {
                        lines.push(std::mem::take(&mut line));
                        line_w = 0;
                    }
                    line.push_str(grapheme);
                    line_w += gw;
                }
                continue;
            }
            if line_w > 0 {
                line.push(' ');
                line_w += 1;
            }
            line.push_str(word);
            line_w += word_w;
        }
        lines.push(line);
    }
    lines
}

/// Cells on the outline of an axis-aligned ellipse.
///
/// `cx`, `cy`, `rx`, `ry` are in (fractional) cell units. Points are
/// sampled by angle densely enough to leave no gaps and deduplicated;
/// cells outside `clip` are dropped.
pub fn ellipse_points(cx: f64, cy: f64, rx: f64, ry: f64, clip: Rect) -> Vec<(u16, u16)> {
    let steps = ((rx.max(ry) * 8.0).ceil() as usize).max(16);
    let mut out: Vec<(u16, u16)> = Vec::with_capacity(steps);
    for i in 0..steps {
        let theta = std::f64::consts::TAU * i as f64 / steps as f64;
        let x = (cx + rx * theta.cos()).floor();
        let y = (cy + ry * theta.sin()).floor();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (x, y) = (x as u16, y as u16);
        if clip.contains(x, y) && !out.contains(&(x, y)) {
            out.push((x, y));
        }
    }
    out
}
