//! Region labeling and counter-clockwise contour tracing over a bit grid.
//!
//! [`OutlineTracer`] owns a packed bit grid and a lazily recomputed label
//! grid. Mutations mark the labels dirty; the next label-dependent operation
//! relabels the whole grid with two flood-fill families:
//! - black cells form 4-connected components, labels `1, 2, 3, ...` in
//!   row-major first-encounter order;
//! - white cells reachable from the border via 8-connected adjacency form the
//!   single outer region, label `0`; the remaining white components are
//!   enclosed holes, labels `-1, -2, ...`.
//!
//! [`OutlineTracer::trace`] walks every labeled region counter-clockwise and
//! streams `begin` / `line_to` / `end` events to a [`ContourSink`]: black
//! silhouettes first in ascending label order, then holes in descending
//! order. Nested contours cancel under the even-odd fill rule, so the event
//! stream maps directly onto an SVG path with `fill-rule="evenodd"`.
//!
//! Only turns emit vertices; collinear boundary points are elided.

mod corner;
mod label;
mod sink;
mod tracer;
mod walk;

pub use sink::{Contour, ContourSink, PathCollector};
pub use tracer::OutlineTracer;
