//! Random inputs for tests.

use itertools::Itertools;
use rand::Rng;

use crate::*;

/// Creates a list of `m` random edges for nodes `0..n`; loops and parallel edges are possible
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// Creates a list of `m` random edges for nodes `0..n` that form a DAG.
///
/// Edges point from a smaller to a larger position of a random permutation, so the DAG is not
/// trivially ordered by node id. Requires `n >= 2`.
pub(crate) fn random_dag_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    assert!(n >= 2);

    let mut perm = (0..n).collect_vec();
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }

    (0..m)
        .map(|_| {
            let a = rng.random_range(0..n - 1);
            let b = rng.random_range(a + 1..n);
            Edge(perm[a as usize], perm[b as usize])
        })
        .collect_vec()
}
