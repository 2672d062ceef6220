//! Generation-by-generation growth of the subdivision tree.
//!
//! Implements the Cartwright & Whitworth recipe: every frontier node draws
//! `nsubs` uniform values in one batch, keeps a child per draw below the
//! survival probability, and is itself pruned when the litter is incomplete.
//! Growth stops once the surviving-node count reaches twice the requested
//! star count; the overshoot leaves the subsampling stage enough points to
//! choose from without biasing the distribution by depth.

use log::{debug, trace, warn};
use rand::distr::StandardUniform;
use rand::Rng;

use crate::tree::FractalTree;

/// Outcome of a completed (non-degenerate) growth run.
#[derive(Clone, Debug)]
pub struct Growth {
    pub tree: FractalTree,
    pub generations: usize,
    pub size: usize,
}

/// Grows a subdivision tree until `size >= 2 * nstars`.
///
/// `size` tracks the number of active nodes incrementally: +1 per surviving
/// child, -1 when a parent is retroactively pruned. A generation with no
/// survivors discards the whole tree and starts over; with `retry_cap =
/// None` the redraw loop is unbounded, matching the reference recipe, so a
/// survival probability near zero can spin here by design. Passing
/// `Some(cap)` instead panics after `cap` discarded trees.
///
/// # Panics
///
/// Panics if `nstars == 0`, `nsubs < 2`, or the retry cap is exhausted.
pub fn grow<R: Rng>(
    nstars: usize,
    nsubs: usize,
    probability: f64,
    retry_cap: Option<usize>,
    rng: &mut R,
) -> Growth {
    assert!(nstars > 0, "nstars must be positive");
    assert!(nsubs >= 2, "need at least two sub-cubes per subdivision");

    let mut redraws = 0usize;

    'attempt: loop {
        let mut tree = FractalTree::new();
        let mut size = 1usize;
        let mut generations = 0usize;
        let mut frontier = vec![FractalTree::ROOT];

        while size < 2 * nstars {
            generations += 1;
            let mut survivors = Vec::new();

            for &parent in &frontier {
                let draws: Vec<f64> =
                    (&mut *rng).sample_iter(StandardUniform).take(nsubs).collect();

                let mut alive = 0usize;
                for &draw in &draws {
                    let active = draw < probability;
                    let child = tree.add_child(parent, active);
                    if active {
                        alive += 1;
                        survivors.push(child);
                    }
                }

                size += alive;
                if alive < nsubs {
                    // incomplete litter: the parent no longer counts
                    tree.deactivate(parent);
                    size -= 1;
                }
            }

            trace!(
                "generation {}: {} parents -> {} survivors, size {}",
                generations,
                frontier.len(),
                survivors.len(),
                size
            );
            frontier = survivors;

            if frontier.is_empty() {
                warn!(
                    "no descendants after generation {}, redrawing fractal",
                    generations
                );
                redraws += 1;
                if let Some(cap) = retry_cap {
                    assert!(
                        redraws <= cap,
                        "fractal growth exceeded retry cap of {cap} redraws; \
                         survival probability {probability} is too low"
                    );
                }
                continue 'attempt;
            }
        }

        debug!(
            "tree grown after {} redraws: {} generations, {} nodes, size {}",
            redraws,
            generations,
            tree.len(),
            size
        );
        return Growth {
            tree,
            generations,
            size,
        };
    }
}
