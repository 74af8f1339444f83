/*!
# Directed Graph Store

[`Graph`] owns a fixed number of nodes `0..n`, an optional label per node and one edge list per
node. Edge lists are index-based ([`Node`] ids) and are owned exclusively by the graph.

Edges are appended internally but iterated back to front, so the observable order is the one
of prepending every new edge: the most recently added edge comes first.
*/

use smallvec::SmallVec;

use super::*;

/// Outgoing edges of a single node. Most nodes of sparse graphs fit inline.
pub type EdgeList = SmallVec<[Node; 4]>;

/// A directed multigraph with a fixed number of nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<EdgeList>,
    labels: Vec<Option<String>>,
    num_edges: NumEdges,
    state: TraversalState,
}

impl Graph {
    /// Creates a graph with `n` nodes, no edges and no labels.
    ///
    /// # Errors
    /// Fails with [`GraphError::TooManyNodes`] if `n == Node::MAX` (reserved as invalid node) or if
    /// the per-node arrays cannot be allocated.
    pub fn new(n: NumNodes) -> Result<Self, GraphError> {
        if n == INVALID_NODE {
            return Err(GraphError::TooManyNodes(n as u64));
        }

        let len = n as usize;
        let too_many = |_| GraphError::TooManyNodes(n as u64);

        let mut edges = Vec::new();
        edges.try_reserve_exact(len).map_err(too_many)?;
        edges.resize_with(len, EdgeList::new);

        let mut labels = Vec::new();
        labels.try_reserve_exact(len).map_err(too_many)?;
        labels.resize(len, None);

        Ok(Self {
            edges,
            labels,
            num_edges: 0,
            state: TraversalState::try_new(n)?,
        })
    }

    /// Returns the outgoing edges of `u` in insertion order.
    /// ** Panics if `u >= n` **
    pub fn edge_list(&self, u: Node) -> &[Node] {
        &self.edges[u as usize]
    }

    /// Returns an iterator over all labels (`None` for unlabelled nodes)
    pub fn labels(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.labels.iter().map(|l| l.as_deref())
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.edges.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for Graph {
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges[u as usize].iter().rev().copied()
    }

    fn ith_edge_of(&self, u: Node, i: NumNodes) -> Option<Node> {
        let nbs = &self.edges[u as usize];
        let i = i as usize;
        (i < nbs.len()).then(|| nbs[nbs.len() - 1 - i])
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges[u as usize].len() as NumNodes
    }
}

impl GraphEdgeEditing for Graph {
    fn add_edge(&mut self, u: Node, v: Node) {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return;
        }

        self.edges[u as usize].push(v);
        self.num_edges += 1;
    }
}

impl GraphFromScratch for Graph {
    fn try_new(n: NumNodes) -> Result<Self, GraphError> {
        Self::new(n)
    }

    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = match Self::new(n) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        };
        graph.add_edges(edges);
        graph
    }
}

impl GraphLabels for Graph {
    fn label(&self, u: Node) -> Option<&str> {
        self.labels[u as usize].as_deref()
    }

    fn set_label<S: Into<String>>(&mut self, u: Node, label: S) {
        if let Some(slot) = self.labels.get_mut(u as usize) {
            *slot = Some(label.into());
        }
    }
}

impl EmbeddedTraversalState for Graph {
    fn traversal_state(&self) -> &TraversalState {
        &self.state
    }

    fn traversal_state_mut(&mut self) -> &mut TraversalState {
        &mut self.state
    }
}
