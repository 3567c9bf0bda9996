use po_core::AreaGrid;

use crate::corner::{Dir, INNER_CORNERS, OUTER_CORNERS, is_corner};
use crate::sink::ContourSink;

/// Step vectors for the counter-clockwise boundary walk, one entry per
/// heading: the probe cell classified for a corner, the moves taken on an
/// inner turn, an outer turn, and a straight continuation.
struct WalkStep {
    check: (i32, i32),
    inner: (i32, i32),
    outer: (i32, i32),
    straight: (i32, i32),
}

const WALK_CCW: [WalkStep; 4] = [
    // East
    WalkStep {
        check: (-1, -1),
        inner: (0, 1),
        outer: (0, -1),
        straight: (1, 0),
    },
    // North
    WalkStep {
        check: (-1, 0),
        inner: (1, 0),
        outer: (-1, 0),
        straight: (0, -1),
    },
    // West
    WalkStep {
        check: (0, 0),
        inner: (0, -1),
        outer: (0, 1),
        straight: (-1, 0),
    },
    // South
    WalkStep {
        check: (0, -1),
        inner: (-1, 0),
        outer: (1, 0),
        straight: (0, 1),
    },
];

/// Walks the boundary of the region labeled `area` counter-clockwise,
/// starting at `(x0, y0)` heading South, and streams the vertex events to
/// `sink`.
///
/// `(x0, y0)` must be the row-major-first cell of the region. That choice
/// also makes the start vertex the region's top-left corner, which cannot be
/// a self-touching pinch point (nothing of the region lies above-left of it),
/// so the position-only termination test below completes the full circuit
/// even for pinched boundaries.
pub(crate) fn walk_ccw<S: ContourSink>(
    areas: &AreaGrid,
    x0: i32,
    y0: i32,
    area: i32,
    sink: &mut S,
) {
    let mut x = x0;
    let mut y = y0;
    let mut dir = Dir::South;

    sink.begin(x, y, area);
    loop {
        let step = &WALK_CCW[dir.index()];
        let cx = x + step.check.0;
        let cy = y + step.check.1;

        if is_corner(areas, cx, cy, area, dir, INNER_CORNERS) {
            sink.line_to(x, y);
            x += step.inner.0;
            y += step.inner.1;
            dir = dir.prev();
        } else if is_corner(areas, cx, cy, area, dir, OUTER_CORNERS) {
            sink.line_to(x, y);
            x += step.outer.0;
            y += step.outer.1;
            dir = dir.next();
        } else {
            x += step.straight.0;
            y += step.straight.1;
        }

        // Position-only termination, heading ignored.
        if x == x0 && y == y0 {
            break;
        }
    }
    sink.end();
}

#[cfg(test)]
mod tests {
    use po_core::{AreaGrid, BitGrid};

    use super::walk_ccw;
    use crate::label::relabel;
    use crate::sink::PathCollector;

    fn areas_of(width: i32, height: i32, black: &[(i32, i32)]) -> AreaGrid {
        let mut bits = BitGrid::new(width, height).expect("valid grid");
        for &(x, y) in black {
            bits.set(x, y).expect("in bounds");
        }
        let mut areas = AreaGrid::new(width, height).expect("valid grid");
        relabel(&bits, &mut areas, &mut Vec::new());
        areas
    }

    #[test]
    fn single_cell_traces_the_unit_square() {
        let areas = areas_of(1, 1, &[(0, 0)]);
        let mut sink = PathCollector::new();
        walk_ccw(&areas, 0, 0, 1, &mut sink);

        let contours = sink.contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].area, 1);
        assert_eq!(contours[0].points, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn square_block_elides_collinear_vertices() {
        let areas = areas_of(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut sink = PathCollector::new();
        walk_ccw(&areas, 0, 0, 1, &mut sink);

        // Four corners only; the midpoints of each edge are straight walks.
        assert_eq!(
            sink.contours()[0].points,
            vec![(0, 0), (0, 2), (2, 2), (2, 0)]
        );
    }

    #[test]
    fn l_shape_has_one_inner_corner() {
        let areas = areas_of(2, 2, &[(0, 0), (0, 1), (1, 1)]);
        let mut sink = PathCollector::new();
        walk_ccw(&areas, 0, 0, 1, &mut sink);

        assert_eq!(
            sink.contours()[0].points,
            vec![(0, 0), (0, 2), (2, 2), (2, 1), (1, 1), (1, 0)]
        );
    }

    #[test]
    fn hole_contour_walks_from_its_first_cell() {
        let ring: Vec<(i32, i32)> = (0..3)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .filter(|&(x, y)| (x, y) != (1, 1))
            .collect();
        let areas = areas_of(3, 3, &ring);

        let mut sink = PathCollector::new();
        walk_ccw(&areas, 1, 1, -1, &mut sink);

        let contour = &sink.contours()[0];
        assert_eq!(contour.area, -1);
        assert_eq!(contour.points, vec![(1, 1), (1, 2), (2, 2), (2, 1)]);
    }

    #[test]
    fn pinched_boundary_completes_the_full_circuit() {
        // Two arms joined only diagonally at the vertex (2, 2), connected the
        // long way around. The boundary passes that vertex twice; the walk
        // must not stop there, only back at the start cell's corner.
        let cells = [(1, 0), (2, 0), (3, 0), (1, 1), (3, 1), (2, 2), (3, 2)];
        let areas = areas_of(4, 4, &cells);

        let mut sink = PathCollector::new();
        walk_ccw(&areas, 1, 0, 1, &mut sink);

        let contour = &sink.contours()[0];
        assert_eq!(
            contour.points,
            vec![
                (1, 0),
                (1, 2),
                (2, 2),
                (2, 1),
                (3, 1),
                (3, 2),
                (2, 2),
                (2, 3),
                (4, 3),
                (4, 0),
            ]
        );

        let pinch_visits = contour
            .points
            .iter()
            .filter(|&&p| p == (2, 2))
            .count();
        assert_eq!(pinch_visits, 2);
    }
}
