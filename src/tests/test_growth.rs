use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::growth::grow;
use crate::tests::{init_test_logging, SEED};
use crate::tree::FractalTree;

const NSUBS: usize = 8; // ndiv=2, dim=3

fn survival_probability(fdim: f64) -> f64 {
    2f64.powf(fdim - 3.0)
}

#[test]
fn growth_reaches_double_threshold() {
    init_test_logging();
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(1000, NSUBS, survival_probability(1.6), None, &mut rng);

    assert!(grown.size >= 2000);
    assert!(grown.generations >= 1);
}

#[test]
fn size_matches_active_node_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(500, NSUBS, survival_probability(1.6), None, &mut rng);

    assert_eq!(grown.size, grown.tree.active_count());
}

#[test]
fn every_expanded_node_has_a_full_litter() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(500, NSUBS, survival_probability(1.6), None, &mut rng);

    for id in 0..grown.tree.len() {
        let node = grown.tree.node(id);
        assert!(
            node.children.is_empty() || node.children.len() == NSUBS,
            "node {} has a partial litter of {}",
            id,
            node.children.len()
        );
    }
}

#[test]
fn active_parents_only_lose_children_to_later_pruning() {
    // An active parent had all its children drawn active; any child inactive
    // now must have been pruned as an incomplete parent itself, so it has
    // children of its own.
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(500, NSUBS, survival_probability(1.6), None, &mut rng);

    for id in 0..grown.tree.len() {
        let node = grown.tree.node(id);
        if !node.active || node.children.is_empty() {
            continue;
        }
        for &child in &node.children {
            let c = grown.tree.node(child);
            assert!(
                c.active || !c.children.is_empty(),
                "active parent {} holds a never-active child {}",
                id,
                child
            );
        }
    }
}

#[test]
fn certain_survival_builds_the_full_tree() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(1000, NSUBS, 1.0, None, &mut rng);

    // 1 + 8 + 64 + 512 + 4096 nodes, none pruned
    assert_eq!(grown.generations, 4);
    assert_eq!(grown.size, 4681);
    assert_eq!(grown.tree.len(), 4681);
    assert_eq!(grown.tree.active_count(), 4681);
}

#[test]
fn root_is_pruned_when_first_litter_is_incomplete() {
    // With p well below 1 the first generation is almost never complete, so
    // the root itself ends up inactive for this seed.
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let grown = grow(100, NSUBS, survival_probability(1.6), None, &mut rng);

    assert!(!grown.tree.node(FractalTree::ROOT).active);
}

#[test]
#[should_panic(expected = "retry cap")]
fn zero_survival_exhausts_the_retry_cap() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    grow(10, NSUBS, 0.0, Some(3), &mut rng);
}
