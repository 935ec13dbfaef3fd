#![forbid(unsafe_code)]

//! A 2D grid of cells.
//!
//! Cells are stored row-major. Out-of-bounds writes are ignored so widgets
//! can draw without clipping every coordinate themselves.

use orbit_core::geometry::Rect;

use crate::cell::Cell;

/// A rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y). Ignored when out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle with a cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let Some(rect) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells of row `y`, or an empty slice when out of bounds.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Row `y` as plain text: empty cells become spaces and continuation
    /// cells are skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y)
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.content.as_char().unwrap_or(' '))
            .collect()
    }

    /// Whole buffer as text, one line per row, trailing spaces trimmed.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
