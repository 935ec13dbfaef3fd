#![forbid(unsafe_code)]

//! Cell styling.

use crate::cell::{Cell, PackedRgba, StyleFlags};

/// A partial cell style. Unset fields leave the cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<PackedRgba>,
    /// Background color.
    pub bg: Option<PackedRgba>,
    /// Attributes added to the cell.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flags);
        self
    }

    /// Shorthand for bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    /// Shorthand for dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    /// Shorthand for underline.
    #[must_use]
    pub fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    /// Whether applying this style would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Apply this style to a cell in place.
    pub fn apply(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs |= attrs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_only_given_fields() {
        let mut cell = Cell::from_char('Z').with_bg(PackedRgba::rgb(9, 9, 9));
        Style::new().fg(PackedRgba::rgb(255, 0, 0)).apply(&mut cell);
        assert_eq!(cell.fg, PackedRgba::rgb(255, 0, 0));
        assert_eq!(cell.bg, PackedRgba::rgb(9, 9, 9));
        assert_eq!(cell.content.as_char(), Some('Z'));
    }

    #[test]
    fn attrs_accumulate() {
        let style = Style::new().bold().underline();
        assert_eq!(
            style.attrs,
            Some(StyleFlags::BOLD | StyleFlags::UNDERLINE)
        );
        let mut cell = Cell::default();
        style.apply(&mut cell);
        assert!(cell.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn empty_style_is_noop() {
        let style = Style::default();
        assert!(style.is_empty());
        let mut cell = Cell::from_char('a');
        let before = cell;
        style.apply(&mut cell);
        assert_eq!(cell, before);
    }
}
