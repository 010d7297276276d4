//! Heesch numbers of polyiamonds.
//!
//! The Heesch number of a shape is the largest number of complete coronas,
//! rings of isometric copies covering every boundary cell without overlap,
//! that can surround it. This crate enumerates free polyiamonds on the
//! triangular lattice, reduces corona completion to Boolean satisfiability
//! and certifies Heesch numbers up to a configurable cap.

pub mod corona;
pub mod generator;
pub mod grid;
pub mod heesch;
pub mod placement;
pub mod search;
pub mod shape;

pub use corona::{solve_corona, SatBackend, SolverFailure};
pub use generator::{fixed_polyiamonds, free_polyiamonds};
pub use heesch::{heesch_number, HeeschOutcome, HeeschResult};
pub use placement::{find_placements, Placement};
pub use search::{search, SearchConfig, SearchReport, ShapeReport};
pub use shape::{Polyiamond, ShapeError};
