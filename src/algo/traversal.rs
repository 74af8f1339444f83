/*!
Traversal algorithms as methods on graphs that carry their own traversal state.

[`Traversal`] runs the engines of [`bfs`](super::bfs) and [`topo`](super::topo) against the state
embedded in the graph, so results can afterwards be read per node
(`graph.distance_of(u)`, `graph.predecessor_of(u)`, ...). Use the `*_with_state` functions
instead when several analyses should share one `&Graph`.
*/

use super::*;

/// Provides convenient traversal methods (BFS, topological order, shortest paths)
pub trait Traversal: AdjacencyList + EmbeddedTraversalState {
    /// Runs a breadth-first search from `source` on the embedded traversal state.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use graphread::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::from_edges(3, [(0, 1), (1, 2)]);
    /// graph.bfs(0).unwrap();
    ///
    /// assert_eq!(graph.distance_of(2), Some(2));
    /// assert_eq!(graph.predecessor_of(2), Some(1));
    /// ```
    fn bfs(&mut self, source: Node) -> Result<BfsSummary, GraphError> {
        let mut state = self.take_traversal_state();
        let result = bfs_with_state(&*self, source, &mut state);
        self.restore_traversal_state(state);
        result
    }

    /// Returns all nodes in **topological order** (reverse depth-first postorder).
    /// The order is unspecified if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use graphread::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::from_edges(3, [(0, 1), (1, 2)]);
    /// assert_eq!(graph.topological_order(), vec![0, 1, 2]);
    /// ```
    fn topological_order(&mut self) -> Vec<Node> {
        let mut state = self.take_traversal_state();
        let order = topological_order_with_state(&*self, &mut state);
        self.restore_traversal_state(state);
        order
    }

    /// Computes a **shortest path** from `start` to `end` using BFS.
    ///
    /// Returns `Some(path)` with `path[0] == start` and `path.last() == Some(&end)` if `end` is
    /// reachable and `None` otherwise.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `start` or `end` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use graphread::{prelude::*, algo::*};
    ///
    /// let mut graph = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    /// assert_eq!(graph.shortest_path(0, 2).unwrap(), Some(vec![0, 2]));
    /// assert_eq!(graph.shortest_path(0, 3).unwrap(), None);
    /// ```
    fn shortest_path(&mut self, start: Node, end: Node) -> Result<Option<Vec<Node>>, GraphError> {
        if !self.has_vertex(end) {
            return Err(GraphError::NodeOutOfRange {
                node: end,
                node_count: self.number_of_nodes(),
            });
        }

        self.bfs(start)?;
        Ok(self.traversal_state().path_to(end))
    }
}

impl<G> Traversal for G where G: AdjacencyList + EmbeddedTraversalState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_stay_on_graph() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let mut graph =
            Graph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let summary = graph.bfs(1).unwrap();
        assert_eq!(summary.reached, 6);
        assert_eq!(graph.distance_of(3), Some(3));
        assert!(graph.is_visited(5));

        graph.bfs(5).unwrap();
        assert!(!graph.is_visited(1));
        assert_eq!(graph.distance_of(1), None);
        assert_eq!(graph.predecessor_of(3), Some(4));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        graph.reset_traversal_state();
        assert!(graph.traversal_state().is_reset());

        graph.bfs(0).unwrap();
        graph.topological_order();
        graph.reset_traversal_state();
        graph.reset_traversal_state();
        assert!(graph.traversal_state().is_reset());
        assert_eq!(graph.traversal_state().len(), 4);
    }

    #[test]
    fn failed_bfs_keeps_state() {
        let mut graph = Graph::from_edges(2, [(0, 1)]);
        graph.bfs(0).unwrap();

        assert!(graph.bfs(7).is_err());
        assert_eq!(graph.distance_of(1), Some(1));
    }

    #[test]
    fn shortest_path() {
        let mut graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (0, 3), (3, 4)]);
        assert_eq!(graph.shortest_path(0, 4).unwrap(), Some(vec![0, 3, 4]));
        assert_eq!(graph.shortest_path(2, 2).unwrap(), Some(vec![2]));
        assert_eq!(graph.shortest_path(4, 0).unwrap(), None);
        assert!(graph.shortest_path(0, 5).is_err());
        assert!(graph.shortest_path(5, 0).is_err());
    }
}
