//! FractalCluster: build parameters and the finalized point cloud.
//!
//! A [`FractalCluster`] is produced once by
//! [`crate::builder::FractalClusterBuilder`] and is immutable afterwards.
//! Positions are stored as a dense row-major `(nstars, dim)` matrix; the
//! grown tree, generation count and surviving-node count remain observable
//! for diagnostics.

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::tree::FractalTree;

/// Input parameters of a build, plus the RNG seed actually used.
///
/// `fdim` is the target fractal dimension; values in `(0, dim]` keep the
/// survival probability in `(0, 1]`. Larger values degrade to full
/// subdivision, values near zero make redraws likely.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub nstars: usize,
    pub fdim: f64,
    pub ndiv: usize,
    pub dim: usize,
    pub seed: u64,
}

impl FractalParams {
    /// Candidate children per subdivision: `ndiv^dim`.
    #[inline]
    pub fn nsubs(&self) -> usize {
        self.ndiv.pow(self.dim as u32)
    }

    /// Per-child survival probability: `ndiv^(fdim - dim)`.
    #[inline]
    pub fn probability(&self) -> f64 {
        (self.ndiv as f64).powf(self.fdim - self.dim as f64)
    }
}

/// A finalized fractal point cluster.
#[derive(Clone, Debug)]
pub struct FractalCluster {
    params: FractalParams,
    tree: FractalTree,
    generations: usize,
    size: usize,
    positions: DenseMatrix<f64>,
}

impl FractalCluster {
    pub(crate) fn new(
        params: FractalParams,
        tree: FractalTree,
        generations: usize,
        size: usize,
        rows: Vec<Vec<f64>>,
    ) -> Self {
        let nrows = rows.len();
        let mut flat = Vec::with_capacity(nrows * params.dim);
        for row in &rows {
            flat.extend_from_slice(row);
        }
        let positions = DenseMatrix::from_iterator(flat.into_iter(), nrows, params.dim, 0);

        Self {
            params,
            tree,
            generations,
            size,
            positions,
        }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// The grown subdivision tree, pruned nodes included.
    pub fn tree(&self) -> &FractalTree {
        &self.tree
    }

    /// Subdivision depth reached by the build.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Surviving-node count at the end of growth; at least `2 * nstars`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Final coordinates, shape `(nstars, dim)`, each component in `[-1, 1]`.
    pub fn positions(&self) -> &DenseMatrix<f64> {
        &self.positions
    }

    /// Positions copied out row by row.
    pub fn positions_rows(&self) -> Vec<Vec<f64>> {
        let (nrows, _) = self.positions.shape();
        (0..nrows)
            .map(|i| self.positions.get_row(i).iterator(0).copied().collect())
            .collect()
    }
}
