//! The corona loop: Heesch numbers of single shapes.
//!
//! Starting from the base shape, coronas are found one at a time, each
//! extending the occupied region, until one is proved impossible, the back
//! end fails, or the configured cap is reached. Reaching the cap is a
//! lower bound and deliberately not the same thing as tiling the plane.

use rustc_hash::FxHashSet;

use crate::corona::{solve_corona, SatBackend};
use crate::grid::{self, Cell};
use crate::placement::Placement;
use crate::shape::Polyiamond;

/// How a Heesch computation ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeeschOutcome {
    /// The next corona was proved impossible: the number is exact.
    Exact,
    /// The cap was reached; the true number is at least the reported one.
    CapReached,
    /// The back end failed on the next corona; the reported number is a
    /// lower bound and the message explains what went wrong.
    BackendFailed(String),
}

/// Result of surrounding one shape with coronas.
#[derive(Clone, Debug)]
pub struct HeeschResult {
    /// Number of complete coronas found.
    pub heesch_number: usize,
    /// The coronas, innermost first; placements within a corona are in
    /// solver model order.
    pub coronas: Vec<Vec<Placement>>,
    /// Whether the number is exact, capped, or cut short by a failure.
    pub outcome: HeeschOutcome,
}

impl HeeschResult {
    /// Placement counts per corona, innermost first.
    pub fn corona_sizes(&self) -> Vec<usize> {
        self.coronas.iter().map(Vec::len).collect()
    }
}

/// Computes the Heesch number of `shape`, certifying at most `cap` coronas.
pub fn heesch_number(shape: &Polyiamond, cap: usize, backend: SatBackend) -> HeeschResult {
    let mut occupied: FxHashSet<Cell> = shape.cell_set();
    let mut coronas: Vec<Vec<Placement>> = Vec::new();

    for _ in 0..cap {
        let boundary = grid::boundary(&occupied);
        match solve_corona(shape, &occupied, &boundary, backend) {
            Ok(Some(corona)) => {
                for placement in &corona {
                    occupied.extend(placement.cells().iter().copied());
                }
                coronas.push(corona);
            }
            Ok(None) => {
                return HeeschResult {
                    heesch_number: coronas.len(),
                    coronas,
                    outcome: HeeschOutcome::Exact,
                };
            }
            Err(failure) => {
                return HeeschResult {
                    heesch_number: coronas.len(),
                    coronas,
                    outcome: HeeschOutcome::BackendFailed(failure.to_string()),
                };
            }
        }
    }

    HeeschResult {
        heesch_number: coronas.len(),
        coronas,
        outcome: HeeschOutcome::CapReached,
    }
}
