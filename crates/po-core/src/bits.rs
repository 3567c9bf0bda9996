use crate::Error;

/// Packed boolean grid: eight cells per byte, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: i32,
    height: i32,
    bytes: Vec<u8>,
}

impl BitGrid {
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        let cells = checked_cells(width, height)?;
        Ok(Self {
            width,
            height,
            bytes: vec![0; cells.div_ceil(8)],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn set(&mut self, x: i32, y: i32) -> Result<(), Error> {
        let (byte, bit) = self.locate(x, y)?;
        self.bytes[byte] |= 1 << bit;
        Ok(())
    }

    pub fn unset(&mut self, x: i32, y: i32) -> Result<(), Error> {
        let (byte, bit) = self.locate(x, y)?;
        self.bytes[byte] &= !(1 << bit);
        Ok(())
    }

    pub fn is_set(&self, x: i32, y: i32) -> Result<bool, Error> {
        let (byte, bit) = self.locate(x, y)?;
        Ok(self.bytes[byte] & (1 << bit) != 0)
    }

    /// Infallible read: cells outside the grid are white.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.bytes[idx / 8] & (1 << (7 - idx % 8)) != 0
    }

    fn locate(&self, x: i32, y: i32) -> Result<(usize, u32), Error> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return Err(Error::OutOfBounds { x, y });
        }
        let idx = y as usize * self.width as usize + x as usize;
        Ok((idx / 8, 7 - (idx % 8) as u32))
    }
}

pub(crate) fn checked_cells(width: i32, height: i32) -> Result<usize, Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidSize { width, height });
    }
    (width as i64)
        .checked_mul(height as i64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(Error::TooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::BitGrid;
    use crate::Error;

    #[test]
    fn set_unset_round_trip() {
        let mut grid = BitGrid::new(5, 4).expect("valid grid");

        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(grid.is_set(x, y), Ok(false));
                grid.set(x, y).expect("in bounds");
                assert_eq!(grid.is_set(x, y), Ok(true));
                grid.unset(x, y).expect("in bounds");
                assert_eq!(grid.is_set(x, y), Ok(false));
            }
        }
    }

    #[test]
    fn packing_crosses_byte_boundaries() {
        // 3x3 = 9 cells, so cell (0, 2) lands in the second byte.
        let mut grid = BitGrid::new(3, 3).expect("valid grid");
        grid.set(2, 2).expect("in bounds");
        grid.set(0, 2).expect("in bounds");

        assert_eq!(grid.is_set(2, 2), Ok(true));
        assert_eq!(grid.is_set(0, 2), Ok(true));
        assert_eq!(grid.is_set(1, 2), Ok(false));
    }

    #[test]
    fn out_of_bounds_rejected_and_grid_unchanged() {
        let mut grid = BitGrid::new(3, 2).expect("valid grid");
        grid.set(1, 1).expect("in bounds");
        let snapshot = grid.clone();

        for (x, y) in [(-1, 0), (3, 0), (0, -1), (0, 2), (i32::MIN, i32::MAX)] {
            assert_eq!(grid.set(x, y), Err(Error::OutOfBounds { x, y }));
            assert_eq!(grid.unset(x, y), Err(Error::OutOfBounds { x, y }));
            assert_eq!(grid.is_set(x, y), Err(Error::OutOfBounds { x, y }));
        }
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn invalid_dimensions_rejected() {
        assert_eq!(
            BitGrid::new(0, 5),
            Err(Error::InvalidSize {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            BitGrid::new(5, -1),
            Err(Error::InvalidSize {
                width: 5,
                height: -1
            })
        );
    }

    #[test]
    fn infallible_get_treats_outside_as_white() {
        let mut grid = BitGrid::new(2, 2).expect("valid grid");
        grid.set(0, 0).expect("in bounds");

        assert!(grid.get(0, 0));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
    }
}
