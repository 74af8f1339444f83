/*!
# Breadth-First Distances

Single-source breadth-first search that records, for every node, whether it was reached, its
predecessor on a shortest path and its distance (number of edges) from the source.

The search always runs to completion; there is no target at which it stops early.
*/

use tracing::debug;

use super::*;

/// Outcome of a single breadth-first search run.
/// Per-node results are left in the [`TraversalState`] the run was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsSummary {
    /// Node the search started at
    pub source: Node,
    /// Number of nodes reachable from `source` (including `source`)
    pub reached: NumNodes,
    /// Largest finite distance found
    pub max_distance: Distance,
}

/// Runs a breadth-first search from `source` and writes visited-flags, predecessors and distances
/// into `state`. The state is reset (and resized to the graph) before the search starts.
///
/// Every node reachable from `source` ends with its minimum number of edges from `source` as
/// distance; following its predecessors leads back to `source` along a shortest path. Unreachable
/// nodes keep an infinite distance and no predecessor.
///
/// # Errors
/// Fails with [`GraphError::NodeOutOfRange`] if `source` is not a node of `graph`.
///
/// # Examples
/// ```
/// use graphread::{prelude::*, algo::*};
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2)]);
/// let mut state = TraversalState::for_graph(&graph);
///
/// let summary = bfs_with_state(&graph, 0, &mut state).unwrap();
/// assert_eq!(summary.reached, 3);
/// assert_eq!(state.distances(), &[0, 1, 2]);
/// assert_eq!(state.predecessors(), vec![None, Some(0), Some(1)]);
/// ```
pub fn bfs_with_state<G>(
    graph: &G,
    source: Node,
    state: &mut TraversalState,
) -> Result<BfsSummary, GraphError>
where
    G: AdjacencyList,
{
    if !graph.has_vertex(source) {
        return Err(GraphError::NodeOutOfRange {
            node: source,
            node_count: graph.number_of_nodes(),
        });
    }

    state.reset_for(graph.number_of_nodes());

    let mut summary = BfsSummary {
        source,
        reached: 1,
        max_distance: 0,
    };

    state.visit(source, None, 0);
    let mut queue = NodeQueue::init(source);

    while let Some(u) = queue.pop() {
        let distance = state.distances()[u as usize] + 1;

        for v in graph.edges_of(u) {
            // parallel edges arrive here a second time and are skipped
            if state.is_visited(v) {
                continue;
            }

            state.visit(v, Some(u), distance);
            queue.push(v);

            summary.reached += 1;
            summary.max_distance = distance;
        }
    }

    debug!(
        source,
        reached = summary.reached,
        max_distance = summary.max_distance,
        "breadth-first search finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_edges;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn run(graph: &Graph, source: Node) -> TraversalState {
        let mut state = TraversalState::for_graph(graph);
        bfs_with_state(graph, source, &mut state).unwrap();
        state
    }

    #[test]
    fn path_graph() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]);
        let state = run(&graph, 0);

        assert_eq!(state.distances(), &[0, 1, 2]);
        assert_eq!(state.predecessors(), vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn single_node() {
        let graph = Graph::new(1).unwrap();
        let state = run(&graph, 0);

        assert_eq!(state.distances(), &[0]);
        assert_eq!(state.predecessors(), vec![None]);
    }

    #[test]
    fn unreachable_nodes_stay_infinite() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let state = run(&graph, 5);
        assert_eq!(
            state.distances(),
            &[INFINITE_DISTANCE, INFINITE_DISTANCE, INFINITE_DISTANCE, 2, 1, 0]
        );
        assert_eq!(state.predecessor_of(0), None);
        assert!(!state.is_visited(1));

        let state = run(&graph, 1);
        assert_eq!(state.distances(), &[1, 0, 1, 3, 2, 2]);
        assert_eq!(state.predecessor_of(4), Some(2));
        assert_eq!(state.path_to(3), Some(vec![1, 2, 4, 3]));
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph = Graph::from_edges(3, [(0, 1), (0, 1), (1, 1), (1, 0), (1, 2)]);
        let state = run(&graph, 0);

        assert_eq!(state.distances(), &[0, 1, 2]);
        assert_eq!(state.predecessors(), vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn summary_counts_reached_nodes() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
        let mut state = TraversalState::default();

        let summary = bfs_with_state(&graph, 0, &mut state).unwrap();
        assert_eq!(
            summary,
            BfsSummary {
                source: 0,
                reached: 3,
                max_distance: 2
            }
        );
        assert_eq!(state.len(), 5);
        assert_eq!(state.number_of_visited(), 3);
    }

    #[test]
    fn source_out_of_range() {
        let graph = Graph::new(2).unwrap();
        let mut state = TraversalState::for_graph(&graph);

        assert_eq!(
            bfs_with_state(&graph, 2, &mut state),
            Err(GraphError::NodeOutOfRange {
                node: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn distances_are_minimal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m in [n, n * 2, n * 5] {
                let graph = Graph::from_edges(n, random_edges(rng, n, m));

                for source in [0, n / 2, n - 1] {
                    let state = run(&graph, source);

                    // every reached node extends a shortest path to its predecessor by one edge
                    for v in graph.vertices() {
                        match state.predecessor_of(v) {
                            None => assert!(
                                v == source || state.distance_of(v).is_none(),
                                "{v} reached without predecessor"
                            ),
                            Some(p) => {
                                assert!(graph.edges_of(p).any(|x| x == v));
                                assert_eq!(state.distance_of(v), state.distance_of(p).map(|d| d + 1));
                                assert_eq!(
                                    state.path_to(v).map(|path| path.len() as Distance - 1),
                                    state.distance_of(v)
                                );
                            }
                        }
                    }

                    // no edge can shortcut a distance
                    for Edge(u, v) in graph.edges() {
                        if let Some(du) = state.distance_of(u) {
                            let dv = state.distance_of(v).unwrap();
                            assert!(dv <= du + 1, "edge ({u},{v}) shortcuts {dv} > {du} + 1");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn independent_states_run_in_parallel() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph = Graph::from_edges(100, random_edges(rng, 100, 300));

        let states: Vec<TraversalState> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|source| {
                    let graph = &graph;
                    scope.spawn(move || run(graph, source))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (source, state) in states.iter().enumerate() {
            assert_eq!(*state, run(&graph, source as Node));
        }
    }
}
