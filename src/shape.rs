//! Polyiamond values: validated construction, canonical forms, and the
//! twelve symmetry images.
//!
//! A polyiamond is stored in translation-canonical position so that two
//! copies differing only by a lattice translation compare equal. Congruence
//! under the full point group is decided through [`Polyiamond::orbit_canonical`].

use std::fmt;

use rustc_hash::FxHashSet;

use crate::grid::{self, Cell, NUM_TRANSFORMS, TRANSFORMS};

/// Error constructing a polyiamond from a cell collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// No cells were given.
    Empty,
    /// The cells do not form a single edge-connected region.
    NotConnected,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "polyiamond has no cells"),
            Self::NotConnected => write!(f, "cells do not form a connected polyiamond"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// A polyiamond: a non-empty, edge-connected set of triangular cells.
///
/// Cells are kept sorted in canonical position: `min_y == 0` and `min_x`
/// is 0 or 1, whichever an even-parity translation reaches. Equality is
/// therefore translation-independent, but still distinguishes rotations
/// and reflections.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polyiamond {
    cells: Vec<Cell>,
}

impl Polyiamond {
    /// Creates a polyiamond, validating the cell set.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Result<Self, ShapeError> {
        let set: FxHashSet<Cell> = cells.into_iter().collect();
        if set.is_empty() {
            return Err(ShapeError::Empty);
        }
        if !is_connected(&set) {
            return Err(ShapeError::NotConnected);
        }
        Ok(Self::from_connected(set.into_iter().collect()))
    }

    /// Builds a polyiamond from cells already known to be non-empty,
    /// duplicate-free and connected (the enumerator grows shapes one
    /// neighbor at a time, so re-validating there would be wasted work).
    pub(crate) fn from_connected(mut cells: Vec<Cell>) -> Self {
        canonicalize(&mut cells);
        cells.sort_unstable();
        Self { cells }
    }

    /// The cells in canonical position, sorted.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of triangles.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The cells as a hash set, for membership-heavy callers.
    pub fn cell_set(&self) -> FxHashSet<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Cells adjacent to this polyiamond but not part of it.
    pub fn boundary(&self) -> FxHashSet<Cell> {
        grid::boundary(&self.cell_set())
    }

    /// Applies one entry of the transform table and re-canonicalizes.
    fn transformed(&self, index: usize) -> Self {
        let transform = TRANSFORMS[index];
        Self::from_connected(self.cells.iter().map(|&c| transform(c)).collect())
    }

    /// This polyiamond rotated 60 degrees clockwise.
    pub fn rotate60(&self) -> Self {
        self.transformed(2)
    }

    /// This polyiamond reflected across a horizontal lattice axis.
    pub fn reflect(&self) -> Self {
        self.transformed(1)
    }

    /// All twelve symmetry images in stable transform-index order.
    ///
    /// Symmetric shapes produce duplicates; they are preserved so that an
    /// index into this list always names the same transform.
    pub fn transformations(&self) -> Vec<Self> {
        (0..NUM_TRANSFORMS).map(|t| self.transformed(t)).collect()
    }

    /// The lexicographically least of the twelve images.
    ///
    /// Two polyiamonds are congruent under rotation, reflection and
    /// lattice translation exactly when their orbit canonical forms are
    /// equal, which makes this the dedup key for free-shape enumeration.
    pub fn orbit_canonical(&self) -> Self {
        self.transformations()
            .into_iter()
            .min()
            .unwrap_or_else(|| self.clone())
    }
}

/// Translates cells into canonical position.
///
/// The applied translation must have even parity so every triangle keeps
/// its orientation; when `(-min_x, -min_y)` is odd, the shape lands at
/// `min_x == 1` instead of 0.
fn canonicalize(cells: &mut [Cell]) {
    let mut min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
    if (min_x + min_y) % 2 != 0 {
        min_x -= 1;
    }
    for cell in cells.iter_mut() {
        cell.x -= min_x;
        cell.y -= min_y;
    }
}

/// Depth-first reachability over edge-neighbors.
fn is_connected(cells: &FxHashSet<Cell>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return true;
    };
    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut pending = vec![start];
    while let Some(cell) = pending.pop() {
        for neighbor in cell.neighbors() {
            if cells.contains(&neighbor) && visited.insert(neighbor) {
                pending.push(neighbor);
            }
        }
    }
    visited.len() == cells.len()
}

impl fmt::Display for Polyiamond {
    /// Renders the shape as rows of `▲` and `▼`, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.cell_set();
        let min_x = self.cells.iter().map(|c| c.x).min().unwrap_or(0);
        let max_x = self.cells.iter().map(|c| c.x).max().unwrap_or(0);
        let min_y = self.cells.iter().map(|c| c.y).min().unwrap_or(0);
        let max_y = self.cells.iter().map(|c| c.y).max().unwrap_or(0);

        for y in (min_y..=max_y).rev() {
            for x in min_x..=max_x {
                let cell = Cell::new(x, y);
                let glyph = if set.contains(&cell) {
                    if cell.is_up() {
                        '▲'
                    } else {
                        '▼'
                    }
                } else {
                    ' '
                };
                write!(f, "{glyph}")?;
            }
            if y > min_y {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
