#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, hit testing, and terminal output.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod frame;
#[cfg(not(target_arch = "wasm32"))]
pub mod presenter;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent, PackedRgba, StyleFlags};
pub use frame::{Frame, HitData, HitId, HitRegion};
pub use style::Style;
