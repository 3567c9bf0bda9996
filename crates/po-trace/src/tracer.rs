use po_core::{AreaGrid, BitGrid, Error};

use crate::label::relabel;
use crate::sink::ContourSink;
use crate::walk::walk_ccw;

/// Validity of the derived label grid relative to the bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cache {
    Clean,
    Dirty,
}

/// Owns a bit grid and its derived label grid, and traces region outlines.
///
/// Mutations mark the labels dirty; [`trace`](Self::trace) and
/// [`areas`](Self::areas) relabel lazily. Exclusive `&mut` access carries the
/// single-owner assumption: there is no internal synchronization.
#[derive(Debug)]
pub struct OutlineTracer {
    bits: BitGrid,
    areas: AreaGrid,
    cache: Cache,
    stack: Vec<(i32, i32)>,
}

impl OutlineTracer {
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        let bits = BitGrid::new(width, height)?;
        let areas = AreaGrid::new(width, height)?;
        Ok(Self {
            bits,
            areas,
            cache: Cache::Dirty,
            stack: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.bits.width()
    }

    pub fn height(&self) -> i32 {
        self.bits.height()
    }

    pub fn set(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.bits.set(x, y)?;
        self.cache = Cache::Dirty;
        Ok(())
    }

    pub fn unset(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.bits.unset(x, y)?;
        self.cache = Cache::Dirty;
        Ok(())
    }

    pub fn is_set(&self, x: i32, y: i32) -> Result<bool, Error> {
        self.bits.is_set(x, y)
    }

    /// The current label grid, relabeled first if stale.
    pub fn areas(&mut self) -> &AreaGrid {
        self.refresh();
        &self.areas
    }

    /// Traces every region and streams the contours to `sink`.
    ///
    /// Black components come first in ascending label order, then enclosed
    /// holes in descending order, so an even-odd renderer receives each
    /// silhouette before the contours that cut into it. Labels are dense and
    /// assigned in row-major first-encounter order, so a single row-major
    /// scan per sign finds each label's start cell in sequence; the scan for
    /// label `n + 1` can never hit before the scan for `n` did.
    pub fn trace<S: ContourSink>(&mut self, sink: &mut S) {
        self.refresh();
        let w = self.areas.width();
        let h = self.areas.height();

        let mut area = 1;
        for y in 0..h {
            for x in 0..w {
                if self.areas.get(x, y) == area {
                    walk_ccw(&self.areas, x, y, area, sink);
                    area += 1;
                }
            }
        }

        let mut area = -1;
        for y in 0..h {
            for x in 0..w {
                if self.areas.get(x, y) == area {
                    walk_ccw(&self.areas, x, y, area, sink);
                    area -= 1;
                }
            }
        }
    }

    /// Renders the bit grid and label grid as text, for diagnostics.
    pub fn render_debug(&mut self) -> String {
        self.refresh();
        let mut out = String::from("bits:\n");
        for y in 0..self.bits.height() {
            for x in 0..self.bits.width() {
                out.push(if self.bits.get(x, y) { 'X' } else { '-' });
            }
            out.push('\n');
        }
        out.push_str("areas:\n");
        for y in 0..self.areas.height() {
            for x in 0..self.areas.width() {
                out.push_str(&format!("{:3}", self.areas.get(x, y)));
            }
            out.push('\n');
        }
        out
    }

    fn refresh(&mut self) {
        if self.cache == Cache::Dirty {
            relabel(&self.bits, &mut self.areas, &mut self.stack);
            self.cache = Cache::Clean;
        }
    }
}
