#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Split off the top `rows` rows.
    ///
    /// Returns `(top, rest)`. `rows` is clamped to the rectangle height.
    pub fn split_top(&self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, rows),
            Rect::new(self.x, self.y + rows, self.width, self.height - rows),
        )
    }

    /// Split off the bottom `rows` rows.
    ///
    /// Returns `(rest, bottom)`. `rows` is clamped to the rectangle height.
    pub fn split_bottom(&self, rows: u16) -> (Rect, Rect) {
        let rows = rows.min(self.height);
        let rest = self.height - rows;
        (
            Rect::new(self.x, self.y, self.width, rest),
            Rect::new(self.x, self.y + rest, self.width, rows),
        )
    }

    /// Largest visually square region centered in this rectangle.
    ///
    /// Terminal cells are roughly twice as tall as they are wide, so a
    /// visually square region spans two columns per row.
    pub fn centered_square(&self) -> Rect {
        let rows = self.height.min(self.width / 2);
        let cols = rows.saturating_mul(2);
        let x = self.x + (self.width - cols) / 2;
        let y = self.y + (self.height - rows) / 2;
        Rect::new(x, y, cols, rows)
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    /// Top padding.
    pub top: u16,
    /// Right padding.
    pub right: u16,
    /// Bottom padding.
    pub bottom: u16,
    /// Left padding.
    pub left: u16,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: u16) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: u16) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(14, 14));
        assert!(!rect.contains(15, 14));
        assert!(!rect.contains(9, 10));
    }

    #[test]
    fn rect_intersection_disjoint_is_empty() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 5, 5);
        assert!(a.intersection(&b).is_empty());
        assert_eq!(
            a.intersection(&Rect::new(3, 3, 5, 5)),
            Rect::new(3, 3, 2, 2)
        );
    }

    #[test]
    fn inner_saturates() {
        let rect = Rect::new(0, 0, 3, 3);
        assert!(rect.inner(Sides::all(2)).is_empty());
        assert_eq!(rect.inner(Sides::all(1)), Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn split_top_and_bottom_partition_height() {
        let rect = Rect::new(2, 3, 40, 20);
        let (top, rest) = rect.split_top(1);
        assert_eq!(top, Rect::new(2, 3, 40, 1));
        assert_eq!(rest, Rect::new(2, 4, 40, 19));

        let (rest, bottom) = rest.split_bottom(4);
        assert_eq!(rest, Rect::new(2, 4, 40, 15));
        assert_eq!(bottom, Rect::new(2, 19, 40, 4));
    }

    #[test]
    fn split_clamps_to_height() {
        let rect = Rect::new(0, 0, 10, 2);
        let (top, rest) = rect.split_top(5);
        assert_eq!(top.height, 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn centered_square_is_two_columns_per_row() {
        let wide = Rect::new(0, 0, 80, 20);
        let sq = wide.centered_square();
        assert_eq!(sq, Rect::new(20, 0, 40, 20));

        let tall = Rect::new(0, 0, 20, 30);
        let sq = tall.centered_square();
        assert_eq!(sq, Rect::new(0, 10, 20, 10));
    }

    #[test]
    fn centered_square_of_empty_is_empty() {
        assert!(Rect::new(5, 5, 1, 10).centered_square().is_empty());
    }
}
