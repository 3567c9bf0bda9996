//! Storage primitives for the `pixel-outline` workspace.
//!
//! ## Coordinates
//! Cell coordinates are `i32` with `(0, 0)` at the top-left and y growing
//! downward. Public mutation and query reject out-of-range coordinates with
//! [`Error::OutOfBounds`]; the infallible `get` readers instead treat
//! everything outside the grid as background (white bit, label 0), which is
//! the implicit infinite border the tracing algorithms rely on.
//!
//! ## Grids
//! [`BitGrid`] packs one boolean per cell, eight cells per byte, most
//! significant bit first. [`AreaGrid`] holds one `i32` region label per cell.
//! Both have fixed dimensions set at construction; there is no resizing.

mod areas;
mod bits;
mod error;

pub use areas::AreaGrid;
pub use bits::BitGrid;
pub use error::Error;
