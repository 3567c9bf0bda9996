//! Umbrella crate for the `pixel-outline` workspace.
//!
//! Re-exports the storage primitives and the tracing engine. The gallery
//! binary (`po-gallery`) layers file I/O and SVG assembly on top.

pub use po_core::*;
pub use po_trace::*;
