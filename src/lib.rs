//! Box-fractal star cluster generator after Cartwright & Whitworth (2004).
//!
//! The construction subdivides a unit cube recursively: each surviving node
//! spawns `ndiv^dim` candidate sub-cube centres, each kept with probability
//! `ndiv^(fdim - dim)`, and a parent whose litter is incomplete is pruned.
//! Surviving node paths are mapped to nested geometric offsets and the
//! resulting point cloud is subsampled down to the requested star count.
//!
//! Entry point is [`builder::FractalClusterBuilder`]:
//!
//! ```
//! use fractalcluster::builder::FractalClusterBuilder;
//! use smartcore::linalg::basic::arrays::Array;
//!
//! let cluster = FractalClusterBuilder::new().with_seed(42).build(100, 1.6);
//! assert_eq!(cluster.positions().shape(), (100, 3));
//! ```

pub mod builder;
pub mod core;
pub mod geometry;
pub mod growth;
pub mod sampling;
pub mod tree;

#[cfg(test)]
mod tests;
