//! Exhaustive search over all free polyiamonds of one size.
//!
//! Shapes are independent, so the per-shape Heesch computations fan out
//! across a rayon pool; each worker owns its SAT solver handles and no
//! mutable state is shared. Results keep enumeration order, which makes
//! the report deterministic for a fixed size, cap and back end.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::corona::SatBackend;
use crate::generator::free_polyiamonds;
use crate::heesch::{heesch_number, HeeschResult};
use crate::shape::Polyiamond;

/// Search parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum number of coronas to certify per shape.
    pub cap: usize,
    /// Keep only shapes with exactly this Heesch number.
    pub target_hc: Option<usize>,
    /// Keep only shapes with at least this Heesch number. Ignored when
    /// `target_hc` is set.
    pub min_hc: Option<usize>,
    /// SAT back end used for every corona solve.
    pub backend: SatBackend,
    /// Emit progress counters to standard error.
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cap: 5,
            target_hc: None,
            min_hc: None,
            backend: SatBackend::default(),
            verbose: false,
        }
    }
}

impl SearchConfig {
    /// Whether a computed Heesch number passes the configured filter.
    pub fn admits(&self, heesch_number: usize) -> bool {
        match (self.target_hc, self.min_hc) {
            (Some(target), _) => heesch_number == target,
            (None, Some(min)) => heesch_number >= min,
            (None, None) => true,
        }
    }
}

/// One searched shape together with its Heesch computation.
#[derive(Clone, Debug)]
pub struct ShapeReport {
    pub shape: Polyiamond,
    pub result: HeeschResult,
}

/// Outcome of searching every free `n`-iamond.
#[derive(Debug)]
pub struct SearchReport {
    /// Every unique shape with its result, in enumeration order.
    pub results: Vec<ShapeReport>,
    /// Shape counts keyed by Heesch number.
    pub distribution: BTreeMap<usize, usize>,
}

impl SearchReport {
    /// Results passing the configured filter, in enumeration order.
    pub fn matches<'a>(
        &'a self,
        config: &'a SearchConfig,
    ) -> impl Iterator<Item = &'a ShapeReport> {
        self.results
            .iter()
            .filter(|report| config.admits(report.result.heesch_number))
    }
}

/// Runs the Heesch computation over every free `n`-iamond.
pub fn search(n: usize, config: &SearchConfig) -> SearchReport {
    let shapes = free_polyiamonds(n);
    if config.verbose {
        eprintln!("searching {} free {n}-iamonds", shapes.len());
    }

    let processed = AtomicUsize::new(0);
    let results: Vec<ShapeReport> = shapes
        .into_par_iter()
        .map(|shape| {
            let result = heesch_number(&shape, config.cap, config.backend);
            if config.verbose {
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % 100 == 0 {
                    eprintln!("  processed {done} shapes");
                }
            }
            ShapeReport { shape, result }
        })
        .collect();

    let mut distribution = BTreeMap::new();
    for report in &results {
        *distribution.entry(report.result.heesch_number).or_insert(0) += 1;
    }

    SearchReport {
        results,
        distribution,
    }
}
