/*!
# Topological Order

Reverse postorder of a depth-first forest, computed with an explicit stack so that deep or
skewed graphs cannot overflow the call stack.

On a directed acyclic graph the result is a topological order: for every edge `(u, v)`, `u`
comes before `v`. Cycles are neither detected nor reported; on a cyclic graph the result is
still a permutation of all nodes, but its order is unspecified.
*/

use tracing::debug;

use super::*;

/// Computes a topological order of `graph` using `state` for the visited-flags.
/// The state is reset (and resized to the graph) before the search starts.
///
/// Roots of the depth-first forest are taken in id order. A node is finished (appended to the
/// postorder) once none of its outgoing edges leads to an unvisited node.
///
/// # Examples
/// ```
/// use graphread::{prelude::*, algo::*};
///
/// let graph = Graph::from_edges(4, [(2, 0), (0, 1), (3, 1)]);
/// let mut state = TraversalState::for_graph(&graph);
///
/// let order = topological_order_with_state(&graph, &mut state);
/// assert_eq!(order, vec![3, 2, 0, 1]);
/// ```
pub fn topological_order_with_state<G>(graph: &G, state: &mut TraversalState) -> Vec<Node>
where
    G: AdjacencyList,
{
    state.reset_for(graph.number_of_nodes());

    let mut postorder = Vec::with_capacity(graph.len());
    // (node, index of the next edge to scan)
    let mut stack: NodeStack<(Node, NumNodes)> = NodeStack::new();

    for root in graph.vertices() {
        if state.is_visited(root) {
            continue;
        }

        stack.push((root, 0));
        while let Some(top) = stack.peek_mut() {
            let u = top.0;
            state.mark_visited(u);

            let mut deeper = None;
            while let Some(v) = graph.ith_edge_of(u, top.1) {
                top.1 += 1;
                if !state.is_visited(v) {
                    deeper = Some(v);
                    break;
                }
            }

            match deeper {
                Some(v) => {
                    // mark now, so a second edge into `v` cannot push it again
                    state.mark_visited(v);
                    stack.push((v, 0));
                }
                None => {
                    stack.pop();
                    postorder.push(u);
                }
            }
        }
    }

    debug_assert_eq!(postorder.len(), graph.len());
    debug!(nodes = postorder.len(), "topological order computed");

    postorder.reverse();
    postorder
}
