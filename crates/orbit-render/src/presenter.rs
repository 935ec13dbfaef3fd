#![forbid(unsafe_code)]

//! Presenter: emits ANSI output for a [`Buffer`] using Crossterm commands.
//!
//! The presenter remembers the last presented buffer and only rewrites
//! cells that changed. A size change (or [`Presenter::invalidate`]) forces a
//! full repaint.

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::{cursor, queue};

use crate::buffer::Buffer;
use crate::cell::{Cell, CellContent, PackedRgba, StyleFlags};

/// Stateful ANSI presenter.
#[derive(Debug, Default)]
pub struct Presenter {
    previous: Option<Buffer>,
}

impl Presenter {
    /// Create a presenter with no previous frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next [`present`](Self::present) to repaint everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Write the changed cells of `buffer` to `out` and flush.
    ///
    /// Returns the number of cells written.
    pub fn present<W: Write>(&mut self, buffer: &Buffer, out: &mut W) -> io::Result<usize> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "present",
            w = buffer.width(),
            h = buffer.height()
        )
        .entered();

        let full = self
            .previous
            .as_ref()
            .is_none_or(|prev| prev.width() != buffer.width() || prev.height() != buffer.height());
        if full {
            queue!(
                out,
                ResetColor,
                crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
            )?;
        }

        let mut written = 0usize;
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut pen: Option<Cell> = None;

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if cell.is_continuation() {
                    continue;
                }
                if !full
                    && self
                        .previous
                        .as_ref()
                        .and_then(|prev| prev.get(x, y))
                        .is_some_and(|prev| prev == cell)
                {
                    continue;
                }

                if cursor_at != Some((x, y)) {
                    queue!(out, cursor::MoveTo(x, y))?;
                }
                if pen.is_none_or(|p| !same_pen(&p, cell)) {
                    write_pen(out, cell)?;
                    pen = Some(*cell);
                }
                let ch = match cell.content {
                    CellContent::Char(c) => c,
                    CellContent::Empty | CellContent::Continuation => ' ',
                };
                queue!(out, Print(ch))?;
                let advance = if matches!(
                    buffer.get(x + 1, y).map(|c| c.content),
                    Some(CellContent::Continuation)
                ) {
                    2
                } else {
                    1
                };
                cursor_at = Some((x + advance, y));
                written += 1;
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        out.flush()?;
        self.previous = Some(buffer.clone());
        Ok(written)
    }
}

fn same_pen(a: &Cell, b: &Cell) -> bool {
    a.fg == b.fg && a.bg == b.bg && a.attrs == b.attrs
}

fn to_ct(color: PackedRgba) -> CtColor {
    if color.is_transparent() {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        }
    }
}

fn write_pen<W: Write>(out: &mut W, cell: &Cell) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_ct(cell.fg)),
        SetBackgroundColor(to_ct(cell.bg))
    )?;
    let flags = [
        (StyleFlags::BOLD, Attribute::Bold),
        (StyleFlags::DIM, Attribute::Dim),
        (StyleFlags::ITALIC, Attribute::Italic),
        (StyleFlags::UNDERLINE, Attribute::Underlined),
        (StyleFlags::REVERSE, Attribute::Reverse),
    ];
    for (flag, attr) in flags {
        if cell.attrs.contains(flag) {
            queue!(out, SetAttribute(attr))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_present_writes_every_cell() {
        let mut buf = Buffer::new(3, 2);
        buf.set(0, 0, Cell::from_char('a'));
        let mut presenter = Presenter::new();
        let mut out = Vec::new();
        let written = presenter.present(&buf, &mut out).unwrap();
        assert_eq!(written, 6);
        assert!(String::from_utf8_lossy(&out).contains('a'));
    }

    #[test]
    fn unchanged_buffer_writes_nothing() {
        let buf = Buffer::new(4, 4);
        let mut presenter = Presenter::new();
        presenter.present(&buf, &mut Vec::new()).unwrap();
        let written = presenter.present(&buf, &mut Vec::new()).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn only_changed_cells_are_written() {
        let mut buf = Buffer::new(4, 4);
        let mut presenter = Presenter::new();
        presenter.present(&buf, &mut Vec::new()).unwrap();
        buf.set(2, 3, Cell::from_char('z').with_fg(PackedRgba::rgb(1, 2, 3)));
        let mut out = Vec::new();
        let written = presenter.present(&buf, &mut out).unwrap();
        assert_eq!(written, 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('z'));
        assert!(text.contains("38;2;1;2;3"));
    }

    #[test]
    fn resize_forces_full_repaint() {
        let mut presenter = Presenter::new();
        presenter.present(&Buffer::new(2, 2), &mut Vec::new()).unwrap();
        let written = presenter.present(&Buffer::new(3, 2), &mut Vec::new()).unwrap();
        assert_eq!(written, 6);
        presenter.invalidate();
        let written = presenter.present(&Buffer::new(3, 2), &mut Vec::new()).unwrap();
        assert_eq!(written, 6);
    }
}
