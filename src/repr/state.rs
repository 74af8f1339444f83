/*!
# Traversal State

Per-node fields (`visited`, `predecessor`, `distance`) that a single BFS or topological run
mutates. They are kept in a side structure indexed by node id rather than inside the adjacency
data, so that several analyses can run over the same `&Graph` with one [`TraversalState`] each.

A [`Graph`](super::Graph) embeds one instance for the common single-run use
(see [`EmbeddedTraversalState`]).
*/

use itertools::Itertools;

use crate::{ops::GraphNodeOrder, *};

/// Side array of traversal fields, one entry per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    visited: Vec<bool>,
    predecessor: Vec<Option<OptionalNode>>,
    distance: Vec<Distance>,
}

impl TraversalState {
    /// Creates a reset state for `n` nodes
    pub fn new(n: NumNodes) -> Self {
        let n = n as usize;
        Self {
            visited: vec![false; n],
            predecessor: vec![None; n],
            distance: vec![INFINITE_DISTANCE; n],
        }
    }

    /// Creates a reset state for `n` nodes without aborting if the arrays cannot be allocated.
    ///
    /// # Errors
    /// Fails with [`GraphError::TooManyNodes`] if an allocation fails.
    pub fn try_new(n: NumNodes) -> Result<Self, GraphError> {
        let len = n as usize;
        let too_many = |_| GraphError::TooManyNodes(n as u64);

        let mut visited = Vec::new();
        visited.try_reserve_exact(len).map_err(too_many)?;
        visited.resize(len, false);

        let mut predecessor = Vec::new();
        predecessor.try_reserve_exact(len).map_err(too_many)?;
        predecessor.resize(len, None);

        let mut distance = Vec::new();
        distance.try_reserve_exact(len).map_err(too_many)?;
        distance.resize(len, INFINITE_DISTANCE);

        Ok(Self {
            visited,
            predecessor,
            distance,
        })
    }

    /// Creates a reset state sized for `graph`
    pub fn for_graph<G: GraphNodeOrder>(graph: &G) -> Self {
        Self::new(graph.number_of_nodes())
    }

    /// Number of nodes covered by this state
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns *true* if the state covers no nodes
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Sets every node to unvisited, without predecessor and with infinite distance
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.predecessor.fill(None);
        self.distance.fill(INFINITE_DISTANCE);
    }

    /// Resets the state and resizes it to `n` nodes if it was sized for a different graph
    pub fn reset_for(&mut self, n: NumNodes) {
        if self.len() == n as usize {
            self.reset();
        } else {
            *self = Self::new(n);
        }
    }

    /// Returns *true* if every node is unvisited, without predecessor and at infinite distance
    pub fn is_reset(&self) -> bool {
        self.visited.iter().all(|&v| !v)
            && self.predecessor.iter().all(Option::is_none)
            && self.distance.iter().all(|&d| d == INFINITE_DISTANCE)
    }

    /// Returns *true* if `u` was visited in the current run
    /// ** Panics if `u >= n` **
    pub fn is_visited(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Marks `u` as visited and returns *true* if it was visited before
    /// ** Panics if `u >= n` **
    pub fn mark_visited(&mut self, u: Node) -> bool {
        std::mem::replace(&mut self.visited[u as usize], true)
    }

    /// Marks `u` as visited and records how it was reached
    /// ** Panics if `u >= n` **
    pub fn visit(&mut self, u: Node, predecessor: Option<Node>, distance: Distance) {
        self.visited[u as usize] = true;
        self.predecessor[u as usize] = predecessor.and_then(OptionalNode::new);
        self.distance[u as usize] = distance;
    }

    /// Returns the predecessor of `u` in the current search tree.
    /// Only meaningful if `u` was visited.
    /// ** Panics if `u >= n` **
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.predecessor[u as usize].map(|p| p.get())
    }

    /// Returns the distance of `u` from the source or `None` if `u` was not reached
    /// ** Panics if `u >= n` **
    pub fn distance_of(&self, u: Node) -> Option<Distance> {
        let d = self.distance[u as usize];
        (d != INFINITE_DISTANCE).then_some(d)
    }

    /// Raw distance array where unreached nodes hold [`INFINITE_DISTANCE`]
    pub fn distances(&self) -> &[Distance] {
        &self.distance
    }

    /// Predecessor array with one entry per node
    pub fn predecessors(&self) -> Vec<Option<Node>> {
        self.predecessor
            .iter()
            .map(|p| p.map(|p| p.get()))
            .collect_vec()
    }

    /// Returns the number of visited nodes
    pub fn number_of_visited(&self) -> NumNodes {
        self.visited.iter().filter(|&&v| v).count() as NumNodes
    }

    /// Follows the predecessor chain from `target` back to the root of its search tree and
    /// returns the path `root, ..., target`. Returns `None` if `target` was not visited.
    ///
    /// After a BFS the path is a shortest path from the source with `distance_of(target)` edges.
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        if !self.is_visited(target) {
            return None;
        }

        let mut path = vec![target];
        let mut node = target;
        while let Some(p) = self.predecessor_of(node) {
            // a chain longer than n nodes can only stem from a corrupted state
            assert!(path.len() <= self.len());
            path.push(p);
            node = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Graphs that carry their own [`TraversalState`], i.e. traversal fields "on the node".
///
/// Runs through [`Traversal`](crate::algo::Traversal) use and leave their results here.
pub trait EmbeddedTraversalState: GraphNodeOrder {
    /// Returns a reference to the embedded state
    fn traversal_state(&self) -> &TraversalState;

    /// Returns a mutable reference to the embedded state
    fn traversal_state_mut(&mut self) -> &mut TraversalState;

    /// Sets every node to unvisited, without predecessor and with infinite distance.
    /// Must only be called between runs.
    fn reset_traversal_state(&mut self) {
        let n = self.number_of_nodes();
        self.traversal_state_mut().reset_for(n);
    }

    /// Moves the embedded state out, leaving an empty one behind.
    /// Used to run an engine on `&self` while mutating the state.
    fn take_traversal_state(&mut self) -> TraversalState {
        std::mem::take(self.traversal_state_mut())
    }

    /// Puts back a state previously taken with [`EmbeddedTraversalState::take_traversal_state`]
    fn restore_traversal_state(&mut self, state: TraversalState) {
        *self.traversal_state_mut() = state;
    }

    /// Returns *true* if `u` was visited by the last run
    fn is_visited(&self, u: Node) -> bool {
        self.traversal_state().is_visited(u)
    }

    /// Returns the predecessor of `u` found by the last run
    fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.traversal_state().predecessor_of(u)
    }

    /// Returns the distance of `u` found by the last BFS or `None` if unreached
    fn distance_of(&self, u: Node) -> Option<Distance> {
        self.traversal_state().distance_of(u)
    }
}
