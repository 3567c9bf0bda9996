use crate::Error;
use crate::bits::checked_cells;

/// Region label per cell.
///
/// Label semantics are assigned by the tracing crate: 0 is the outer white
/// region, positive labels are black components, negative labels are enclosed
/// white holes. This container only stores them; reads outside the grid
/// return 0, the implicit infinite white border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaGrid {
    width: i32,
    height: i32,
    labels: Vec<i32>,
}

impl AreaGrid {
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        let cells = checked_cells(width, height)?;
        Ok(Self {
            width,
            height,
            labels: vec![0; cells],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Label read with the implicit border: out-of-bounds is 0.
    pub fn get(&self, x: i32, y: i32) -> i32 {
        if !self.contains(x, y) {
            return 0;
        }
        self.labels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, label: i32) {
        assert!(self.contains(x, y), "label write out of bounds");
        self.labels[y as usize * self.width as usize + x as usize] = label;
    }

    /// Row-major label storage, for diagnostics and tests.
    pub fn as_slice(&self) -> &[i32] {
        &self.labels
    }
}
