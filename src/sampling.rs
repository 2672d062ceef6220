//! Uniform subsampling of the resolved point cloud.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws `nstars` points uniformly with replacement, in draw order.
///
/// Indices come from a single batched `sample_iter` pass over one `Uniform`
/// distribution so that a fixed-seed generator reproduces the selection
/// exactly. Points may repeat.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn sample_with_replacement<R: Rng>(
    points: &[Vec<f64>],
    nstars: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    assert!(!points.is_empty(), "cannot sample from an empty point set");

    let slots = Uniform::new(0, points.len()).expect("non-empty sampling range");
    let picks: Vec<usize> = slots.sample_iter(&mut *rng).take(nstars).collect();

    debug!(
        "subsampled {} of {} candidate points with replacement",
        nstars,
        points.len()
    );
    picks.into_iter().map(|i| points[i].clone()).collect()
}
