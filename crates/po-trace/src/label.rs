use po_core::{AreaGrid, BitGrid};

const N4: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const N8: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Recomputes every region label from the bit grid.
///
/// Sentinels between the passes: 0 marks an unvisited black cell, 1 an
/// unvisited white cell. Four deterministic passes:
/// 1. seed sentinels from the bits;
/// 2. flood the outer white region (8-connected) from all four edges,
///    assigning final label 0;
/// 3. flood each remaining black component (4-connected) in row-major order,
///    labels 1, 2, 3, ...;
/// 4. flood each remaining white component (8-connected, these are the
///    enclosed holes) in row-major order, labels -1, -2, ...
///
/// `stack` is caller-owned scratch so repeated relabels reuse its capacity.
pub(crate) fn relabel(bits: &BitGrid, areas: &mut AreaGrid, stack: &mut Vec<(i32, i32)>) {
    let w = bits.width();
    let h = bits.height();

    for y in 0..h {
        for x in 0..w {
            areas.set(x, y, if bits.get(x, y) { 0 } else { 1 });
        }
    }

    // All four edges, not just one corner: disjoint border-touching white
    // pockets must each join the outer region.
    for x in 0..w {
        flood_white(bits, areas, stack, x, 0, 0);
        flood_white(bits, areas, stack, x, h - 1, 0);
    }
    for y in 0..h {
        flood_white(bits, areas, stack, 0, y, 0);
        flood_white(bits, areas, stack, w - 1, y, 0);
    }

    let mut area = 1;
    for y in 0..h {
        for x in 0..w {
            if bits.get(x, y) && areas.get(x, y) == 0 {
                flood_black(bits, areas, stack, x, y, area);
                area += 1;
            }
        }
    }

    let mut area = -1;
    for y in 0..h {
        for x in 0..w {
            if !bits.get(x, y) && areas.get(x, y) == 1 {
                flood_white(bits, areas, stack, x, y, area);
                area -= 1;
            }
        }
    }
}

/// 4-connected spread over black cells still carrying sentinel 0.
fn flood_black(
    bits: &BitGrid,
    areas: &mut AreaGrid,
    stack: &mut Vec<(i32, i32)>,
    x: i32,
    y: i32,
    area: i32,
) {
    if !bits.get(x, y) || areas.get(x, y) != 0 {
        return;
    }

    stack.clear();
    areas.set(x, y, area);
    stack.push((x, y));

    while let Some((cx, cy)) = stack.pop() {
        for (dx, dy) in N4 {
            let (nx, ny) = (cx + dx, cy + dy);
            if areas.contains(nx, ny) && bits.get(nx, ny) && areas.get(nx, ny) == 0 {
                areas.set(nx, ny, area);
                stack.push((nx, ny));
            }
        }
    }
}

/// 8-connected spread over white cells still carrying sentinel 1. The
/// diagonal steps keep a single-pixel diagonal gap connected to the outside,
/// so it never falsely encloses a hole.
fn flood_white(
    bits: &BitGrid,
    areas: &mut AreaGrid,
    stack: &mut Vec<(i32, i32)>,
    x: i32,
    y: i32,
    area: i32,
) {
    if bits.get(x, y) || areas.get(x, y) != 1 {
        return;
    }

    stack.clear();
    areas.set(x, y, area);
    stack.push((x, y));

    while let Some((cx, cy)) = stack.pop() {
        for (dx, dy) in N8 {
            let (nx, ny) = (cx + dx, cy + dy);
            if areas.contains(nx, ny) && !bits.get(nx, ny) && areas.get(nx, ny) == 1 {
                areas.set(nx, ny, area);
                stack.push((nx, ny));
            }
        }
    }
}
