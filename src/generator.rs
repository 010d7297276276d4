//! Level-wise enumeration of polyiamonds.
//!
//! Fixed shapes grow one boundary cell at a time from the origin triangle;
//! free shapes are the fixed shapes reduced to one representative per
//! congruence class. Dedup keys are the exact sorted cell lists, never bare
//! hashes, so a collision can not silently drop a legitimate shape.

use rustc_hash::FxHashSet;

use crate::grid::Cell;
use crate::shape::Polyiamond;

/// Free polyiamond counts for sizes 1..=12 (OEIS A000577), used to
/// cross-check the enumerator.
pub const KNOWN_FREE_COUNTS: [usize; 12] =
    [1, 1, 1, 4, 6, 12, 24, 66, 160, 448, 1186, 3334];

/// Generates every fixed `n`-iamond containing the origin cell.
///
/// Level 1 holds the single cell `(0, 0)`; each further level adjoins one
/// boundary cell to every shape of the previous level. No translation is
/// applied in this phase, so shapes stay anchored and the sorted cell list
/// is a sound per-level dedup key. Cell lists are returned sorted.
pub fn fixed_polyiamonds(n: usize) -> Vec<Vec<Cell>> {
    if n == 0 {
        return Vec::new();
    }

    let mut level: Vec<Vec<Cell>> = vec![vec![Cell::new(0, 0)]];
    for _ in 1..n {
        let mut seen: FxHashSet<Vec<Cell>> = FxHashSet::default();
        let mut next: Vec<Vec<Cell>> = Vec::new();

        for cells in &level {
            let occupied: FxHashSet<Cell> = cells.iter().copied().collect();
            for cell in cells {
                for neighbor in cell.neighbors() {
                    if occupied.contains(&neighbor) {
                        continue;
                    }
                    let mut grown = cells.clone();
                    grown.push(neighbor);
                    grown.sort_unstable();
                    // the same grown shape is reachable through several
                    // parents and several attachment cells
                    if seen.insert(grown.clone()) {
                        next.push(grown);
                    }
                }
            }
        }
        level = next;
    }
    level
}

/// Generates one representative per congruence class of `n`-iamonds.
///
/// Streams the fixed shapes through an orbit-canonical seen-set; the
/// returned representative is the canonical form itself.
pub fn free_polyiamonds(n: usize) -> Vec<Polyiamond> {
    let mut seen: FxHashSet<Polyiamond> = FxHashSet::default();
    let mut free = Vec::new();

    for cells in fixed_polyiamonds(n) {
        let canonical = Polyiamond::from_connected(cells).orbit_canonical();
        if seen.insert(canonical.clone()) {
            free.push(canonical);
        }
    }
    free
}
