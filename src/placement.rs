//! Candidate tile placements around an occupied region.
//!
//! A placement is one isometric copy of the base shape. Candidates are
//! enumerated by anchoring every cell of every symmetry image on every
//! boundary cell: a copy that never touches the boundary cannot help close
//! a ring, so this anchoring is exhaustive without scanning translations
//! that cannot contribute.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

use crate::grid::{self, Cell};
use crate::shape::Polyiamond;

/// One isometric copy of the base shape at a fixed position.
///
/// Identity is extensional: two placements are equal exactly when they
/// cover the same cells. The transform index and translation that produced
/// the copy are kept for reproducibility and debugging.
#[derive(Clone, Debug)]
pub struct Placement {
    cells: Vec<Cell>,
    transform: usize,
    dx: i32,
    dy: i32,
}

impl Placement {
    /// The covered cells, sorted.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of covered cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Index into the symmetry-image table (0..12) this copy was built from.
    pub fn transform(&self) -> usize {
        self.transform
    }

    /// The even-parity translation applied to the symmetry image.
    pub fn translation(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Placement {}

impl Hash for Placement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

/// Enumerates the deduplicated placements of `shape` that avoid `occupied`
/// and touch `boundary`.
///
/// For every image cell `a` aligned on every boundary cell `b`, the
/// translation `b - a` is tried; odd-parity translations are skipped
/// outright because they are not lattice isometries. A single placement is
/// reachable through many `(a, b)` pairs, so results are deduplicated by
/// cell set.
pub fn find_placements(
    shape: &Polyiamond,
    occupied: &FxHashSet<Cell>,
    boundary: &FxHashSet<Cell>,
) -> Vec<Placement> {
    let images = shape.transformations();
    let mut seen: FxHashSet<Vec<Cell>> = FxHashSet::default();
    let mut placements = Vec::new();

    for (transform, image) in images.iter().enumerate() {
        for &target in boundary {
            for &anchor in image.cells() {
                let dx = target.x - anchor.x;
                let dy = target.y - anchor.y;
                if (dx + dy) % 2 != 0 {
                    continue;
                }

                let cells = grid::translate(image.cells(), dx, dy);
                if cells.iter().any(|c| occupied.contains(c)) {
                    continue;
                }
                if seen.insert(cells.clone()) {
                    placements.push(Placement {
                        cells,
                        transform,
                        dx,
                        dy,
                    });
                }
            }
        }
    }
    placements
}
