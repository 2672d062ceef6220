//! Sub-cube geometry: centre offsets, slot decomposition, path resolution.
//!
//! Maps the combinatorial output of the growth stage (per-generation child
//! slots) onto Euclidean coordinates inside the unit cube centred at the
//! origin, then scales to the `[-1, 1]` convention used downstream.
//!
//! # Examples
//!
//! Centre offsets for one axis of a unit-side cube split in two:
//!
//! ```
//! use fractalcluster::geometry::{ClusterGeometry, ClusterGeometryOps};
//!
//! let centers = ClusterGeometry::subcube_centers(1.0, 2);
//! assert_eq!(centers, vec![-0.25, 0.25]);
//! ```

/// Offset and index arithmetic for the box-fractal construction.
///
/// Provided as a trait over a unit struct so specialised backends can swap
/// the implementation in tests.
pub trait ClusterGeometryOps {
    /// Centre offsets of `ndiv` equal sub-intervals of `[-side/2, +side/2]`.
    ///
    /// Equivalent to taking the odd-indexed points of a `2*ndiv + 1` point
    /// linspace over the same interval.
    ///
    /// # Panics
    ///
    /// Panics if `ndiv < 2`.
    fn subcube_centers(side: f64, ndiv: usize) -> Vec<f64>;

    /// Decomposes a sub-cube slot number `nr` in `[0, ndiv^dim)` into `dim`
    /// per-axis indices, most significant axis first.
    ///
    /// ```
    /// use fractalcluster::geometry::{ClusterGeometry, ClusterGeometryOps};
    /// // slot 5 of a 2x2x2 subdivision is (1, 0, 1)
    /// assert_eq!(ClusterGeometry::slot_to_indices(5, 2, 3), vec![1, 0, 1]);
    /// ```
    fn slot_to_indices(nr: usize, ndiv: usize, dim: usize) -> Vec<usize>;

    /// Converts child-index paths into points of the `[-1, 1]^dim` cube.
    ///
    /// Generation `g` contributes offsets from a sub-cube of side
    /// `1 / ndiv^g`; the leading root placeholder of each path is skipped.
    /// The accumulated unit-cube point is scaled by 2 at the end.
    fn resolve_positions(
        paths: &[Vec<usize>],
        generations: usize,
        ndiv: usize,
        dim: usize,
    ) -> Vec<Vec<f64>>;
}

/// Default implementation of [`ClusterGeometryOps`].
pub struct ClusterGeometry;

impl ClusterGeometryOps for ClusterGeometry {
    #[inline]
    fn subcube_centers(side: f64, ndiv: usize) -> Vec<f64> {
        assert!(ndiv > 1, "ndiv must be at least 2");
        let step = side / ndiv as f64;
        (0..ndiv)
            .map(|k| -side / 2.0 + (2 * k + 1) as f64 * step / 2.0)
            .collect()
    }

    #[inline]
    fn slot_to_indices(mut nr: usize, ndiv: usize, dim: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(dim);
        for axis in (0..dim).rev() {
            let base = ndiv.pow(axis as u32);
            indices.push(nr / base);
            nr %= base;
        }
        indices
    }

    fn resolve_positions(
        paths: &[Vec<usize>],
        generations: usize,
        ndiv: usize,
        dim: usize,
    ) -> Vec<Vec<f64>> {
        // one centre table per generation, side shrinking by 1/ndiv each level
        let centers: Vec<Vec<f64>> = (0..generations)
            .map(|g| Self::subcube_centers(1.0 / (ndiv as f64).powi(g as i32), ndiv))
            .collect();

        paths
            .iter()
            .map(|path| {
                let mut point = vec![0.0f64; dim];
                for (g, &nr) in path[1..].iter().enumerate() {
                    let indices = Self::slot_to_indices(nr, ndiv, dim);
                    for (axis, &idx) in indices.iter().enumerate() {
                        point[axis] += centers[g][idx];
                    }
                }
                for v in point.iter_mut() {
                    *v *= 2.0;
                }
                point
            })
            .collect()
    }
}
