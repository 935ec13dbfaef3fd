#![forbid(unsafe_code)]

//! Description panel: a rule, a title row, and word-wrapped body text.

use orbit_core::geometry::Rect;
use orbit_render::drawing::{draw_text_span, truncate_to_width, wrap_words};
use orbit_render::{Cell, Frame, PackedRgba, Style};

use crate::Widget;

#[derive(Debug, Clone)]
pub struct DescriptionPanel<'a> {
    title: &'a str,
    body: Option<&'a str>,
    accent: PackedRgba,
}

impl<'a> DescriptionPanel<'a> {
    #[must_use]
    pub fn new(title: &'a str, body: Option<&'a str>) -> Self {
        Self {
            title,
            body,
            accent: PackedRgba::WHITE,
        }
    }

    #[must_use]
    pub fn accent(mut self, accent: PackedRgba) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for DescriptionPanel<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let buf = &mut frame.buffer;
        let rule = Cell::from_char('─').with_fg(self.accent.mix(PackedRgba::BLACK, 0.5));
        buf.fill(Rect::new(area.x, area.y, area.width, 1), rule);

        let (_, rest) = area.split_top(1);
        if rest.is_empty() {
            return;
        }
        let width = rest.width as usize;
        let title = truncate_to_width(self.title, width);
        let title_style = Style::new().fg(self.accent).bold();
        draw_text_span(buf, rest.x, rest.y, &title, title_style, rest.right());

        let Some(body) = self.body else {
            return;
        };
        let rows = rest.height.saturating_sub(1) as usize;
        let mut lines = wrap_words(body, width);
        if lines.len() > rows {
            lines.truncate(rows);
            if let Some(last) = lines.last_mut() {
                *last = truncate_to_width(&format!("{last} …"), width);
            }
        }
        for (i, line) in lines.iter().enumerate() {
            let y = rest.y + 1 + i as u16;
            draw_text_span(buf, rest.x, y, line, Style::new(), rest.right());
        }
    }
}
