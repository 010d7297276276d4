//! Triangular-lattice cells and their isometries.
//!
//! Each cell is one unit equilateral triangle addressed by an integer pair
//! `(x, y)`. Orientation is a pure function of parity: `x + y` even points
//! up, odd points down. Up and down triangles alternate along a row, and a
//! cell shares an edge with exactly three others.
//!
//! Translations are only lattice isometries when `dx + dy` is even; an odd
//! sum flips every triangle's orientation and breaks the neighbor relation.
//! Every code path that produces a translation must keep this parity.

use rustc_hash::FxHashSet;

/// A cell of the triangular lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this triangle points up.
    #[inline]
    pub const fn is_up(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Whether this triangle points down.
    #[inline]
    pub const fn is_down(self) -> bool {
        !self.is_up()
    }

    /// The three cells sharing an edge with this one.
    ///
    /// Both orientations share their slanted edges with the cells directly
    /// left and right; the horizontal edge is below an up triangle and
    /// above a down triangle.
    #[inline]
    pub fn neighbors(self) -> [Cell; 3] {
        let vertical = if self.is_up() { self.y - 1 } else { self.y + 1 };
        [
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x, vertical),
        ]
    }
}

/// Size of the lattice point group (six rotations times two reflections).
pub const NUM_TRANSFORMS: usize = 12;

/// Rotates a cell 60 degrees clockwise about the lattice vertex shared by
/// the six cells `(0,0) (1,0) (2,0) (2,-1) (1,-1) (0,-1)`.
///
/// The closed form is exact: both numerators below are always even, so no
/// Cartesian round-trip is needed. A rotation about a lattice vertex swaps
/// triangle orientation, which is why the formula depends on parity.
#[inline]
pub fn rotate60(c: Cell) -> Cell {
    let parity = (c.x + c.y).rem_euclid(2);
    Cell::new((c.x + 3 * c.y + parity) / 2 + 1, (c.y - c.x + parity) / 2)
}

/// Reflects a cell across the horizontal axis through the same vertex.
///
/// An involution; like [`rotate60`] it swaps triangle orientation.
#[inline]
pub fn reflect_x(c: Cell) -> Cell {
    Cell::new(c.x, -c.y - 1)
}

/// The full point group of the lattice as cell transforms.
///
/// Index `2k` is [`rotate60`] applied `k` times; index `2k + 1` is that
/// rotation followed by [`reflect_x`]. Placement identities record these
/// indices, so the ordering must stay stable.
pub const TRANSFORMS: [fn(Cell) -> Cell; NUM_TRANSFORMS] = [
    |c| c,
    |c| reflect_x(c),
    |c| rotate60(c),
    |c| reflect_x(rotate60(c)),
    |c| rotate60(rotate60(c)),
    |c| reflect_x(rotate60(rotate60(c))),
    |c| rotate60(rotate60(rotate60(c))),
    |c| reflect_x(rotate60(rotate60(rotate60(c)))),
    |c| rotate60(rotate60(rotate60(rotate60(c)))),
    |c| reflect_x(rotate60(rotate60(rotate60(rotate60(c))))),
    |c| rotate60(rotate60(rotate60(rotate60(rotate60(c))))),
    |c| reflect_x(rotate60(rotate60(rotate60(rotate60(rotate60(c)))))),
];

/// Cells outside `cells` that share an edge with it.
///
/// Non-empty whenever `cells` is.
pub fn boundary(cells: &FxHashSet<Cell>) -> FxHashSet<Cell> {
    let mut boundary = FxHashSet::default();
    for cell in cells {
        for neighbor in cell.neighbors() {
            if !cells.contains(&neighbor) {
                boundary.insert(neighbor);
            }
        }
    }
    boundary
}

/// Translates every cell by `(dx, dy)`.
///
/// The translation must have even parity; generating an odd one anywhere in
/// the engine is a bug, not an input error.
pub fn translate(cells: &[Cell], dx: i32, dy: i32) -> Vec<Cell> {
    debug_assert!(
        (dx + dy) % 2 == 0,
        "odd-parity translation ({dx}, {dy}) is not a lattice isometry"
    );
    cells
        .iter()
        .map(|c| Cell::new(c.x + dx, c.y + dy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A patch of cells large enough to exercise both orientations and all
    /// sign combinations.
    fn patch() -> Vec<Cell> {
        let mut cells = Vec::new();
        for x in -6..=6 {
            for y in -6..=6 {
                cells.push(Cell::new(x, y));
            }
        }
        cells
    }

    #[test]
    fn test_orientation_parity() {
        assert!(Cell::new(0, 0).is_up());
        assert!(Cell::new(1, 0).is_down());
        assert!(Cell::new(0, -1).is_down());
        assert!(Cell::new(-1, -1).is_up());
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        for cell in patch() {
            for neighbor in cell.neighbors() {
                assert!(
                    neighbor.neighbors().contains(&cell),
                    "{cell:?} -> {neighbor:?} is one-directional"
                );
            }
        }
    }

    #[test]
    fn test_neighbors_alternate_orientation() {
        for cell in patch() {
            for neighbor in cell.neighbors() {
                assert_ne!(cell.is_up(), neighbor.is_up());
            }
        }
    }

    #[test]
    fn test_rotate60_has_order_six() {
        for cell in patch() {
            let mut image = cell;
            for step in 1..=6 {
                image = rotate60(image);
                if step < 6 {
                    assert_ne!(image, cell, "rotation closed early at step {step}");
                }
            }
            assert_eq!(image, cell);
        }
    }

    #[test]
    fn test_rotate60_orbit_of_origin_cell() {
        // The six triangles meeting at the rotation center.
        let mut cell = Cell::new(0, 0);
        let mut orbit = vec![cell];
        for _ in 0..5 {
            cell = rotate60(cell);
            orbit.push(cell);
        }
        assert_eq!(
            orbit,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, -1),
                Cell::new(1, -1),
                Cell::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_reflect_x_is_involution() {
        for cell in patch() {
            assert_eq!(reflect_x(reflect_x(cell)), cell);
        }
    }

    #[test]
    fn test_isometries_flip_orientation() {
        for cell in patch() {
            assert_ne!(rotate60(cell).is_up(), cell.is_up());
            assert_ne!(reflect_x(cell).is_up(), cell.is_up());
        }
    }

    #[test]
    fn test_isometries_preserve_adjacency() {
        for cell in patch() {
            for neighbor in cell.neighbors() {
                assert!(rotate60(cell).neighbors().contains(&rotate60(neighbor)));
                assert!(reflect_x(cell).neighbors().contains(&reflect_x(neighbor)));
            }
        }
    }

    #[test]
    fn test_transform_table_matches_composition() {
        for cell in patch() {
            let mut rotated = cell;
            for k in 0..6 {
                assert_eq!(TRANSFORMS[2 * k](cell), rotated);
                assert_eq!(TRANSFORMS[2 * k + 1](cell), reflect_x(rotated));
                rotated = rotate60(rotated);
            }
        }
    }

    #[test]
    fn test_transforms_are_pairwise_distinct() {
        // The point group acts faithfully: an asymmetric probe separates
        // all twelve transforms.
        let probe = [Cell::new(0, 0), Cell::new(3, 1), Cell::new(5, 2)];
        let images: Vec<Vec<Cell>> = TRANSFORMS
            .iter()
            .map(|t| probe.iter().map(|&c| t(c)).collect())
            .collect();
        for i in 0..NUM_TRANSFORMS {
            for j in i + 1..NUM_TRANSFORMS {
                assert_ne!(images[i], images[j], "transforms {i} and {j} coincide");
            }
        }
    }

    #[test]
    fn test_boundary_of_single_cell() {
        let mut cells = FxHashSet::default();
        cells.insert(Cell::new(0, 0));
        let boundary = boundary(&cells);
        let expected: FxHashSet<Cell> = Cell::new(0, 0).neighbors().into_iter().collect();
        assert_eq!(boundary, expected);
    }

    #[test]
    fn test_boundary_surrounds_triangle_of_side_two() {
        // An up triangle plus its three neighbors forms a side-two triangle
        // whose boundary is the six cells along its edges.
        let cells: FxHashSet<Cell> = [
            Cell::new(0, 0),
            Cell::new(-1, 0),
            Cell::new(1, 0),
            Cell::new(0, -1),
        ]
        .into_iter()
        .collect();
        let boundary = boundary(&cells);
        assert_eq!(boundary.len(), 6);
        assert!(boundary.iter().all(|c| !cells.contains(c)));
    }

    #[test]
    fn test_translate_even_parity() {
        let cells = vec![Cell::new(0, 0), Cell::new(1, 0)];
        let moved = translate(&cells, 3, 1);
        assert_eq!(moved, vec![Cell::new(3, 1), Cell::new(4, 1)]);
    }

    #[test]
    #[should_panic(expected = "odd-parity translation")]
    fn test_translate_rejects_odd_parity() {
        translate(&[Cell::new(0, 0)], 1, 0);
    }
}
