#![forbid(unsafe_code)]

//! One-row breadcrumb bar with an optional back control.
//!
//! Hit regions (when a hit id is set):
//! - back control: [`HitRegion::Button`], data `0`
//! - each crumb: [`HitRegion::Link`], data = crumb depth

use orbit_core::geometry::Rect;
use orbit_render::drawing::draw_text_span;
use orbit_render::{Frame, HitId, HitRegion, PackedRgba, Style};
use orbit_tree::Crumb;

use crate::Widget;

/// Default back control text.
pub const DEFAULT_BACK_LABEL: &str = "‹ Back";

/// Default crumb separator.
pub const DEFAULT_SEPARATOR: &str = " › ";

/// Breadcrumb row.
#[derive(Debug, Clone)]
pub struct BreadcrumbBar<'a> {
    crumbs: &'a [Crumb<'a>],
    back_label: Option<&'a str>,
    separator: &'a str,
    accent: PackedRgba,
    hit_id: Option<HitId>,
}

impl<'a> BreadcrumbBar<'a> {
    /// Bar showing `crumbs`, root first.
    #[must_use]
    pub fn new(crumbs: &'a [Crumb<'a>]) -> Self {
        Self {
            crumbs,
            back_label: None,
            separator: DEFAULT_SEPARATOR,
            accent: PackedRgba::WHITE,
            hit_id: None,
        }
    }

    /// Show a back control with this text before the crumbs.
    #[must_use]
    pub fn back_label(mut self, label: Option<&'a str>) -> Self {
        self.back_label = label;
        self
    }

    /// Set the separator drawn between crumbs.
    #[must_use]
    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Color of the current (last) crumb.
    #[must_use]
    pub fn accent(mut self, accent: PackedRgba) -> Self {
        self.accent = accent;
        self
    }

    /// Register hit regions under this id.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }
}

impl Widget for BreadcrumbBar<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let y = area.y;
        let max_x = area.right();
        let mut x = area.x;

        if let Some(label) = self.back_label {
            let start = x;
            x = draw_text_span(&mut frame.buffer, x, y, label, Style::new().bold(), max_x);
            if let Some(id) = self.hit_id {
                frame.register_hit(Rect::new(start, y, x - start, 1), id, HitRegion::Button, 0);
            }
            x = draw_text_span(&mut frame.buffer, x, y, "  ", Style::new(), max_x);
        }

        let last = self.crumbs.len().saturating_sub(1);
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if x >= max_x {
                break;
            }
            if i > 0 {
                let sep_style = Style::new().dim();
                x = draw_text_span(&mut frame.buffer, x, y, self.separator, sep_style, max_x);
            }
            let style = if i == last {
                Style::new().fg(self.accent).bold()
            } else {
                Style::new().underline()
            };
            let start = x;
            x = draw_text_span(&mut frame.buffer, x, y, crumb.label, style, max_x);
            if x > start
                && let Some(id) = self.hit_id
            {
                frame.register_hit(
                    Rect::new(start, y, x - start, 1),
                    id,
                    HitRegion::Link,
                    crumb.depth as u64,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs() -> Vec<Crumb<'static>> {
        vec![
            Crumb { id: "me", label: "Me", depth: 0 },
            Crumb { id: "work", label: "Work", depth: 1 },
        ]
    }

    #[test]
    fn renders_back_and_crumbs() {
        let crumbs = crumbs();
        let mut frame = Frame::new(30, 1);
        BreadcrumbBar::new(&crumbs)
            .back_label(Some(DEFAULT_BACK_LABEL))
            .render(frame.bounds(), &mut frame);
        assert_eq!(frame.buffer.row_text(0).trim_end(), "‹ Back  Me › Work");
    }

    #[test]
    fn registers_links_and_button() {
        let crumbs = crumbs();
        let mut frame = Frame::with_hit_grid(30, 1);
        BreadcrumbBar::new(&crumbs)
            .back_label(Some("<"))
            .hit_id(HitId::new(3))
            .render(frame.bounds(), &mut frame);
        // "<  Me › Work"
        assert_eq!(frame.hit_test(0, 0), Some((HitId(3), HitRegion::Button, 0)));
        assert_eq!(frame.hit_test(3, 0), Some((HitId(3), HitRegion::Link, 0)));
        assert_eq!(frame.hit_test(8, 0), Some((HitId(3), HitRegion::Link, 1)));
        assert_eq!(frame.hit_test(5, 0), None);
    }

    #[test]
    fn truncates_at_area_edge() {
        let crumbs = crumbs();
        let mut frame = Frame::new(6, 1);
        BreadcrumbBar::new(&crumbs).render(frame.bounds(), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "Me › W");
    }
}
