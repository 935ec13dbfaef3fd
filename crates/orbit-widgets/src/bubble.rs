#![forbid(unsafe_code)]

//! Percent-space to cell-space mapping and filled bubble drawing.

use orbit_core::geometry::Rect;
use orbit_render::drawing::{display_width, draw_centered, truncate_to_width};
use orbit_render::{Buffer, Cell, PackedRgba, Style};
use orbit_tree::Color;

/// Convert a tree color into a render color.
pub(crate) fn to_rgba(color: Color) -> PackedRgba {
    PackedRgba::rgb(color.r, color.g, color.b)
}

/// Smallest rectangle containing both.
pub(crate) fn union(a: Rect, b: Rect) -> Rect {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = a.right().max(b.right());
    let bottom = a.bottom().max(b.bottom());
    Rect::new(x, y, right - x, bottom - y)
}

/// A square region addressed in percent (0..100 on both axes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub(crate) rect: Rect,
}

impl Viewport {
    pub(crate) fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Cell-space point for a percent-space point.
    pub(crate) fn to_cells(self, px: f64, py: f64) -> (f64, f64) {
        (
            self.rect.x as f64 + px / 100.0 * self.rect.width as f64,
            self.rect.y as f64 + py / 100.0 * self.rect.height as f64,
        )
    }

    /// Percent-space point at the center of cell `(x, y)`.
    pub(crate) fn to_percent(self, x: u16, y: u16) -> (f64, f64) {
        let w = self.rect.width.max(1) as f64;
        let h = self.rect.height.max(1) as f64;
        (
            (x as f64 + 0.5 - self.rect.x as f64) / w * 100.0,
            (y as f64 + 0.5 - self.rect.y as f64) / h * 100.0,
        )
    }

    /// Horizontal and vertical cell radii of a percent radius.
    pub(crate) fn radii(self, pct: f64) -> (f64, f64) {
        (
            pct / 100.0 * self.rect.width as f64,
            pct / 100.0 * self.rect.height as f64,
        )
    }
}

/// Fill the cells whose centers lie inside the ellipse with `bg`.
///
/// Returns the bounding rectangle of the ellipse clipped to `clip`.
pub(crate) fn fill_disc(
    buf: &mut Buffer,
    (cx, cy): (f64, f64),
    (rx, ry): (f64, f64),
    clip: Rect,
    bg: PackedRgba,
) -> Rect {
    let rx = rx.max(0.5);
    let ry = ry.max(0.5);
    let x0 = (cx - rx).floor().max(clip.x as f64) as u16;
    let y0 = (cy - ry).floor().max(clip.y as f64) as u16;
    let x1 = ((cx + rx).ceil() as u16).min(clip.right());
    let y1 = ((cy + ry).ceil() as u16).min(clip.bottom());
    if x0 >= x1 || y0 >= y1 {
        return Rect::default();
    }
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = (x as f64 + 0.5 - cx) / rx;
            let dy = (y as f64 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0
                && let Some(cell) = buf.get_mut(x, y)
            {
                *cell = Cell::default().with_bg(bg);
            }
        }
    }
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// Draw a filled bubble with a centered one-line label.
///
/// The label may overhang the disc by a couple of cells on each side;
/// the returned rectangle covers both.
pub(crate) fn draw_bubble(
    buf: &mut Buffer,
    center: (f64, f64),
    radii: (f64, f64),
    clip: Rect,
    bg: PackedRgba,
    label: &str,
    label_style: Style,
) -> Rect {
    let disc = fill_disc(buf, center, radii, clip, bg);
    let row = center.1.floor();
    if row < clip.y as f64 || row >= clip.bottom() as f64 {
        return disc;
    }
    let row = row as u16;

    let max_w = ((radii.0 * 2.0).round() as usize + 4).max(3);
    let text = truncate_to_width(label, max_w);
    let w = display_width(&text) as f64;
    let left = (center.0 - w / 2.0).floor().max(clip.x as f64) as u16;
    let right = ((center.0 + w / 2.0).ceil() as u16).min(clip.right());
    if left >= right {
        return disc;
    }
    let area = Rect::new(left, row, right - left, 1);
    buf.fill(area, Cell::default().with_bg(bg));
    let style = Style::new().fg(bg.contrast_text()).bg(bg);
    let style = match label_style.attrs {
        Some(attrs) => style.attrs(attrs),
        None => style,
    };
    let drawn = draw_centered(buf, area, row, &text, style);
    union(disc, union(area, drawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_maps_center_and_corners() {
        let vp = Viewport::new(Rect::new(10, 5, 40, 20));
        assert_eq!(vp.to_cells(50.0, 50.0), (30.0, 15.0));
        assert_eq!(vp.to_cells(0.0, 0.0), (10.0, 5.0));
        let (px, py) = vp.to_percent(30, 15);
        assert!((px - 51.25).abs() < 1e-9);
        assert!((py - 52.5).abs() < 1e-9);
        assert_eq!(vp.radii(20.0), (8.0, 4.0));
    }

    #[test]
    fn union_ignores_empty() {
        let a = Rect::new(2, 2, 3, 3);
        assert_eq!(union(a, Rect::default()), a);
        assert_eq!(union(Rect::new(0, 0, 1, 1), a), Rect::new(0, 0, 5, 5));
    }

    #[test]
    fn disc_fills_center_not_corners() {
        let mut buf = Buffer::new(20, 10);
        let bg = PackedRgba::rgb(200, 0, 0);
        let bounds = buf.bounds();
        let rect = fill_disc(&mut buf, (10.0, 5.0), (6.0, 3.0), bounds, bg);
        assert_eq!(rect, Rect::new(4, 2, 12, 6));
        assert_eq!(buf.get(10, 5).unwrap().bg, bg);
        assert_ne!(buf.get(4, 2).unwrap().bg, bg);
    }

    #[test]
    fn disc_is_clipped() {
        let mut buf = Buffer::new(10, 10);
        let clip = Rect::new(0, 0, 5, 5);
        let rect = fill_disc(&mut buf, (5.0, 5.0), (4.0, 4.0), clip, PackedRgba::WHITE);
        assert_eq!(rect, Rect::new(1, 1, 4, 4));
        assert_ne!(buf.get(6, 5).unwrap().bg, PackedRgba::WHITE);
    }

    #[test]
    fn bubble_label_is_centered_with_contrast() {
        let mut buf = Buffer::new(30, 9);
        let bg = PackedRgba::rgb(10, 10, 80);
        let bounds = buf.bounds();
        let rect = draw_bubble(
            &mut buf,
            (15.0, 4.5),
            (6.0, 3.0),
            bounds,
            bg,
            "Work",
            Style::new(),
        );
        assert!(buf.row_text(4).contains("Work"));
        let x = buf.row_text(4).find("Work").unwrap() as u16;
        let cell = buf.get(x, 4).unwrap();
        assert_eq!(cell.fg, PackedRgba::WHITE);
        assert_eq!(cell.bg, bg);
        assert!(rect.contains(x, 4));
    }
}
