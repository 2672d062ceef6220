//! Chainable construction API for [`FractalCluster`].

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{FractalCluster, FractalParams};
use crate::geometry::{ClusterGeometry, ClusterGeometryOps};
use crate::growth;
use crate::sampling;

/// Sub-cubes per axis per generation, when not overridden.
pub const NDIV_DEFAULT: usize = 2;
/// Spatial dimension, when not overridden.
pub const DIM_DEFAULT: usize = 3;

/// Builder for a [`FractalCluster`].
///
/// ```
/// use fractalcluster::builder::FractalClusterBuilder;
/// use smartcore::linalg::basic::arrays::Array;
///
/// let cluster = FractalClusterBuilder::new()
///     .with_seed(7)
///     .build(200, 1.6);
/// assert_eq!(cluster.positions().shape(), (200, 3));
/// assert!(cluster.size() >= 400);
/// ```
#[derive(Clone, Debug)]
pub struct FractalClusterBuilder {
    ndiv: usize,
    dim: usize,
    seed: Option<u64>,
    retry_cap: Option<usize>,
}

impl Default for FractalClusterBuilder {
    fn default() -> Self {
        Self {
            ndiv: NDIV_DEFAULT,
            dim: DIM_DEFAULT,
            seed: None,
            retry_cap: None,
        }
    }
}

impl FractalClusterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subdivision factor per axis; must be at least 2.
    pub fn with_ndiv(mut self, ndiv: usize) -> Self {
        info!("Setting subdivision factor: {}", ndiv);
        self.ndiv = ndiv;
        self
    }

    /// Spatial dimension of the generated points; must be at least 1.
    pub fn with_dim(mut self, dim: usize) -> Self {
        info!("Setting spatial dimension: {}", dim);
        self.dim = dim;
        self
    }

    /// Fixes the RNG seed; identical seeds and parameters reproduce
    /// identical positions. Without this a random seed is drawn.
    pub fn with_seed(mut self, seed: u64) -> Self {
        info!("Setting RNG seed: {}", seed);
        self.seed = Some(seed);
        self
    }

    /// Caps the number of discarded trees before the build panics.
    ///
    /// The reference recipe redraws forever when a generation dies out; the
    /// cap is an opt-in deviation for survival probabilities near zero.
    pub fn with_retry_cap(mut self, cap: usize) -> Self {
        info!("Setting retry cap: {}", cap);
        self.retry_cap = Some(cap);
        self
    }

    /// Grows the tree, resolves coordinates and subsamples `nstars` points.
    ///
    /// # Panics
    ///
    /// Panics if `nstars == 0`, `ndiv < 2`, `dim < 1`, or the retry cap is
    /// exhausted. `fdim` is not validated: values above `dim` degrade to
    /// full subdivision, values at or below zero make redraws near-certain.
    pub fn build(self, nstars: usize, fdim: f64) -> FractalCluster {
        assert!(nstars > 0, "nstars must be positive");
        assert!(self.ndiv > 1, "ndiv must be at least 2");
        assert!(self.dim >= 1, "dim must be at least 1");

        let seed = self.seed.unwrap_or_else(rand::random);
        let params = FractalParams {
            nstars,
            fdim,
            ndiv: self.ndiv,
            dim: self.dim,
            seed,
        };

        info!(
            "Building fractal cluster: nstars={}, fdim={}, ndiv={}, dim={}",
            nstars, fdim, self.ndiv, self.dim
        );
        debug!(
            "Derived constants: nsubs={}, probability={:.6}, seed={}",
            params.nsubs(),
            params.probability(),
            seed
        );

        // one generator threaded through growth and subsampling in draw order
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let grown = growth::grow(
            nstars,
            params.nsubs(),
            params.probability(),
            self.retry_cap,
            &mut rng,
        );

        let paths = grown.tree.active_paths();
        let cloud =
            ClusterGeometry::resolve_positions(&paths, grown.generations, self.ndiv, self.dim);
        debug!(
            "Resolved {} candidate points over {} generations",
            cloud.len(),
            grown.generations
        );

        let rows = sampling::sample_with_replacement(&cloud, nstars, &mut rng);

        info!(
            "Fractal cluster build completed: {} positions, size {}",
            rows.len(),
            grown.size
        );
        FractalCluster::new(params, grown.tree, grown.generations, grown.size, rows)
    }
}
