//! Corona completion as Boolean satisfiability.
//!
//! One variable per candidate placement; a cell covered by several
//! candidates yields pairwise at-most-one clauses, and every boundary cell
//! yields an at-least-one clause over the candidates covering it. A
//! satisfying model names the placements of one complete corona.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

use crate::grid::Cell;
use crate::placement::{find_placements, Placement};
use crate::shape::Polyiamond;

/// Available CDCL back ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SatBackend {
    /// Pure-Rust CDCL solver.
    #[default]
    Varisat,
}

impl fmt::Display for SatBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Varisat => write!(f, "varisat"),
        }
    }
}

/// The back end ended a solve without reaching a SAT/UNSAT verdict.
#[derive(Clone, Debug)]
pub struct SolverFailure {
    message: String,
}

impl SolverFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SolverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SAT back end failed: {}", self.message)
    }
}

impl std::error::Error for SolverFailure {}

/// Searches for one complete corona of `shape` around `occupied`.
///
/// Returns the corona's placements in model order, `Ok(None)` when no
/// complete corona exists, or an error when the back end fails. The solver
/// handle lives only for the duration of the call.
pub fn solve_corona(
    shape: &Polyiamond,
    occupied: &FxHashSet<Cell>,
    boundary: &FxHashSet<Cell>,
    backend: SatBackend,
) -> Result<Option<Vec<Placement>>, SolverFailure> {
    match backend {
        SatBackend::Varisat => solve_corona_varisat(shape, occupied, boundary),
    }
}

fn solve_corona_varisat(
    shape: &Polyiamond,
    occupied: &FxHashSet<Cell>,
    boundary: &FxHashSet<Cell>,
) -> Result<Option<Vec<Placement>>, SolverFailure> {
    let placements = find_placements(shape, occupied, boundary);

    // which candidates cover each cell; keyed over all cells, not just the
    // boundary, because overlaps beyond the boundary are conflicts too
    let mut covering: FxHashMap<Cell, Vec<usize>> = FxHashMap::default();
    for (index, placement) in placements.iter().enumerate() {
        for &cell in placement.cells() {
            covering.entry(cell).or_default().push(index);
        }
    }

    // a boundary cell no candidate reaches makes the instance trivially
    // unsatisfiable, skip the solver entirely
    if boundary.iter().any(|cell| !covering.contains_key(cell)) {
        return Ok(None);
    }

    let mut formula = CnfFormula::new();
    let lits: Vec<Lit> = (0..placements.len()).map(|_| formula.new_lit()).collect();

    for indices in covering.values() {
        for (i, &a) in indices.iter().enumerate() {
            for &b in &indices[i + 1..] {
                formula.add_clause(&[!lits[a], !lits[b]]);
            }
        }
    }

    for cell in boundary {
        let clause: Vec<Lit> = covering[cell].iter().map(|&i| lits[i]).collect();
        formula.add_clause(&clause);
    }

    let mut solver = Solver::new();
    solver.add_formula(&formula);
    match solver.solve() {
        Ok(true) => {
            let model = solver
                .model()
                .ok_or_else(|| SolverFailure::new("satisfiable solve produced no model"))?;
            let chosen: FxHashSet<usize> = model
                .iter()
                .filter(|lit| lit.is_positive())
                .map(|lit| lit.var().index())
                .collect();
            let corona: Vec<Placement> = placements
                .into_iter()
                .enumerate()
                .filter(|(index, _)| chosen.contains(index))
                .map(|(_, placement)| placement)
                .collect();
            debug_assert!(corona_is_valid(&corona, occupied, boundary));
            Ok(Some(corona))
        }
        Ok(false) => Ok(None),
        Err(err) => Err(SolverFailure::new(err.to_string())),
    }
}

/// Contract check on a model: pairwise disjoint, disjoint from the
/// occupied region, and covering every boundary cell.
fn corona_is_valid(
    corona: &[Placement],
    occupied: &FxHashSet<Cell>,
    boundary: &FxHashSet<Cell>,
) -> bool {
    let mut covered = FxHashSet::default();
    for placement in corona {
        for &cell in placement.cells() {
            if occupied.contains(&cell) || !covered.insert(cell) {
                return false;
            }
        }
    }
    boundary.iter().all(|cell| covered.contains(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid;

    fn corona_for(shape: &Polyiamond) -> Option<Vec<Placement>> {
        let occupied = shape.cell_set();
        let boundary = grid::boundary(&occupied);
        solve_corona(shape, &occupied, &boundary, SatBackend::Varisat).unwrap()
    }

    #[test]
    fn test_monotriangle_first_corona() {
        let shape = Polyiamond::new([Cell::new(0, 0)]).unwrap();
        let corona = corona_for(&shape).expect("single triangle must admit a corona");
        // one single-cell copy per boundary cell, all forced
        assert_eq!(corona.len(), 3);
        assert!(corona_is_valid(
            &corona,
            &shape.cell_set(),
            &shape.boundary()
        ));
    }

    #[test]
    fn test_diamond_corona_is_valid() {
        let shape = Polyiamond::new([Cell::new(0, 0), Cell::new(1, 0)]).unwrap();
        let corona = corona_for(&shape).expect("the diamond tiles the plane");
        assert!(corona_is_valid(
            &corona,
            &shape.cell_set(),
            &shape.boundary()
        ));
    }

    #[test]
    fn test_uncoverable_boundary_short_circuits() {
        // Occupying all three neighbors of (0,0) leaves (0,0) on the
        // boundary with no room for any two-cell copy to reach it.
        let shape = Polyiamond::new([Cell::new(0, 0), Cell::new(1, 0)]).unwrap();
        let occupied: FxHashSet<Cell> = Cell::new(0, 0).neighbors().into_iter().collect();
        let boundary = grid::boundary(&occupied);
        assert!(boundary.contains(&Cell::new(0, 0)));

        let result = solve_corona(&shape, &occupied, &boundary, SatBackend::Varisat).unwrap();
        assert!(result.is_none());
    }
}
