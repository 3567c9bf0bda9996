use po_core::AreaGrid;

/// Compass heading of the boundary walk. The discriminant order matters:
/// [`Dir::next`] steps East → North → West → South → East, the
/// counter-clockwise rotation used on outer corners, and [`Dir::prev`] steps
/// the other way, used on inner corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dir {
    East,
    North,
    West,
    South,
}

impl Dir {
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::North => Self::East,
            Self::West => Self::North,
            Self::South => Self::West,
        }
    }
}

/// Neighbor offsets forming the 2x2 block around a cell, one entry per
/// orientation. Relative to cell X the block reads:
///
/// ```text
/// B A
/// C X
/// ```
///
/// A is the diagonal neighbor, B and C the two orthogonal ones. The tables
/// below rotate that block through the four orientations.
struct CornerCells {
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
}

const CORNER_CELLS: [CornerCells; 4] = [
    // East
    CornerCells {
        a: (0, 1),
        b: (1, 1),
        c: (1, 0),
    },
    // North
    CornerCells {
        a: (1, 0),
        b: (1, -1),
        c: (0, -1),
    },
    // West
    CornerCells {
        a: (0, -1),
        b: (-1, -1),
        c: (-1, 0),
    },
    // South
    CornerCells {
        a: (-1, 0),
        b: (-1, 1),
        c: (0, 1),
    },
];

/// Corner fingerprints over the 3-bit neighbor pattern (bit 0 = A matches the
/// target area, bit 1 = B, bit 2 = C). Drawing the eight patterns for one
/// orientation (`C` = probed cell, `X` = matching neighbor) and classifying
/// each by hand:
///
/// ```text
/// pattern:   0   1   2   3   4   5   6   7
///
///                    X   X    X   X  XX  XX
///            C  XC    C  XC   C  XC   C  XC
///
/// class:     O   N   O   I   N   I   I   N
/// ```
///
/// O = outer corner, I = inner corner, N = straight. Encoding each class row
/// as one bit per pattern value gives the two masks.
pub(crate) const OUTER_CORNERS: u8 = 0x05;
pub(crate) const INNER_CORNERS: u8 = 0x68;

/// Classifies the 2x2 neighborhood of `(x, y)` against `mask` for the given
/// orientation. Neighbors outside the grid read as label 0.
pub(crate) fn is_corner(areas: &AreaGrid, x: i32, y: i32, area: i32, dir: Dir, mask: u8) -> bool {
    let cells = &CORNER_CELLS[dir.index()];
    let mut pattern = 0u8;
    if areas.get(x + cells.a.0, y + cells.a.1) == area {
        pattern |= 1 << 0;
    }
    if areas.get(x + cells.b.0, y + cells.b.1) == area {
        pattern |= 1 << 1;
    }
    if areas.get(x + cells.c.0, y + cells.c.1) == area {
        pattern |= 1 << 2;
    }
    mask & (1 << pattern) != 0
}

#[cfg(test)]
mod tests {
    use po_core::AreaGrid;

    use super::{Dir, INNER_CORNERS, OUTER_CORNERS, is_corner};

    /// Builds a 3x3 label grid realizing one of the eight A/B/C patterns for
    /// orientation East around the center cell (1, 1).
    fn grid_with_pattern(pattern: u8) -> AreaGrid {
        let mut areas = AreaGrid::new(3, 3).expect("valid grid");
        areas.set(1, 1, 9); // the cell itself never enters the pattern
        if pattern & 1 != 0 {
            areas.set(1, 2, 9); // A = (0, 1) for East
        }
        if pattern & 2 != 0 {
            areas.set(2, 2, 9); // B = (1, 1)
        }
        if pattern & 4 != 0 {
            areas.set(2, 1, 9); // C = (1, 0)
        }
        areas
    }

    #[test]
    fn pattern_classification_matches_fingerprints() {
        for pattern in 0u8..8 {
            let areas = grid_with_pattern(pattern);
            let outer = is_corner(&areas, 1, 1, 9, Dir::East, OUTER_CORNERS);
            let inner = is_corner(&areas, 1, 1, 9, Dir::East, INNER_CORNERS);

            assert_eq!(outer, matches!(pattern, 0 | 2), "pattern {pattern}");
            assert_eq!(inner, matches!(pattern, 3 | 5 | 6), "pattern {pattern}");
            assert!(!(outer && inner), "pattern {pattern} double-classified");
        }
    }

    #[test]
    fn out_of_grid_neighbors_read_as_background() {
        let mut areas = AreaGrid::new(1, 1).expect("valid grid");
        areas.set(0, 0, 1);

        // All three probed neighbors fall outside the grid: pattern 0, outer.
        assert!(is_corner(&areas, 0, 0, 1, Dir::East, OUTER_CORNERS));
        assert!(!is_corner(&areas, 0, 0, 1, Dir::East, INNER_CORNERS));

        // Probing against area 0 flips every out-of-grid read to a match:
        // pattern 7, straight.
        assert!(!is_corner(&areas, 0, 0, 0, Dir::East, OUTER_CORNERS));
        assert!(!is_corner(&areas, 0, 0, 0, Dir::East, INNER_CORNERS));
    }

    #[test]
    fn rotation_cycles() {
        assert_eq!(Dir::South.next(), Dir::East);
        assert_eq!(Dir::East.next(), Dir::North);
        assert_eq!(Dir::East.prev(), Dir::South);
        assert_eq!(Dir::South.prev(), Dir::West);

        let mut dir = Dir::West;
        for _ in 0..4 {
            dir = dir.next();
        }
        assert_eq!(dir, Dir::West);
    }
}
