#![forbid(unsafe_code)]

//! Frame: a cell buffer plus the hit grid used for mouse interaction.
//!
//! Widgets draw into `frame.buffer` and register clickable regions with
//! [`Frame::register_hit`]. After rendering, the embedding loop resolves a
//! mouse position with [`Frame::hit_test`] and passes the result back to
//! the widget that owns the [`HitId`].

use orbit_core::geometry::Rect;

use crate::buffer::Buffer;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data for hit callbacks.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Clickable button.
    Button,
    /// Navigational link.
    Link,
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    /// Widget that registered this cell, if any.
    pub widget_id: Option<HitId>,
    /// Region tag for the hit area.
    pub region: HitRegion,
    /// Extra data attached to this hit cell.
    pub data: HitData,
}

/// Hit testing grid mapping screen positions to widget regions.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![HitCell::default(); width as usize * height as usize],
        }
    }

    /// Register a clickable region. Later registrations win on overlap.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize);
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize);
        if rect.x as usize >= x_end || rect.y as usize >= y_end {
            return;
        }

        let hit_cell = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for y in rect.y as usize..y_end {
            let row_start = y * self.width as usize;
            self.cells[row_start + rect.x as usize..row_start + x_end].fill(hit_cell);
        }
    }

    /// Hit test at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[y as usize * self.width as usize + x as usize];
        cell.widget_id.map(|id| (id, cell.region, cell.data))
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Rendering target handed to widgets.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Cell contents.
    pub buffer: Buffer,
    hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Create a frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Create a frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    /// Frame width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The full frame area.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear cells and hit regions.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = &mut self.hit_grid {
            grid.clear();
        }
    }

    /// Register a hit region. Returns `false` when hit testing is disabled.
    pub fn register_hit(
        &mut self,
        rect: Rect,
        id: HitId,
        region: HitRegion,
        data: HitData,
    ) -> bool {
        match &mut self.hit_grid {
            Some(grid) => {
                grid.register(rect, id, region, data);
                true
            }
            None => false,
        }
    }

    /// Hit test at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|g| g.hit_test(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_hit_test() {
        let mut frame = Frame::with_hit_grid(10, 5);
        assert!(frame.register_hit(Rect::new(2, 1, 3, 2), HitId::new(7), HitRegion::Button, 42));
        assert_eq!(frame.hit_test(2, 1), Some((HitId(7), HitRegion::Button, 42)));
        assert_eq!(frame.hit_test(4, 2), Some((HitId(7), HitRegion::Button, 42)));
        assert_eq!(frame.hit_test(5, 1), None);
        assert_eq!(frame.hit_test(2, 3), None);
    }

    #[test]
    fn later_registration_wins() {
        let mut grid = HitGrid::new(4, 1);
        grid.register(Rect::new(0, 0, 4, 1), HitId(1), HitRegion::Content, 0);
        grid.register(Rect::new(1, 0, 1, 1), HitId(1), HitRegion::Content, 9);
        assert_eq!(grid.hit_test(1, 0).map(|h| h.2), Some(9));
        assert_eq!(grid.hit_test(2, 0).map(|h| h.2), Some(0));
    }

    #[test]
    fn frame_without_grid_ignores_hits() {
        let mut frame = Frame::new(4, 4);
        assert!(!frame.register_hit(Rect::new(0, 0, 1, 1), HitId(1), HitRegion::Content, 0));
        assert_eq!(frame.hit_test(0, 0), None);
    }

    #[test]
    fn register_clips_and_clear_resets() {
        let mut frame = Frame::with_hit_grid(3, 3);
        frame.register_hit(Rect::new(2, 2, 50, 50), HitId(3), HitRegion::Link, 1);
        assert!(frame.hit_test(2, 2).is_some());
        assert_eq!(frame.hit_test(3, 3), None);
        frame.clear();
        assert_eq!(frame.hit_test(2, 2), None);
    }
}
