use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used where
    /// additional mutable references of self are needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a valid node id of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges are counted individually)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to outgoing edges.
///
/// Both traversal engines are written against this trait.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the targets of all outgoing edges of `u`.
    /// The order is the reverse of the insertion order and does not change between calls.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the `i`-th target in the order of [`AdjacencyList::edges_of`] or `None` if `u`
    /// has at most `i` outgoing edges.
    /// ** Panics if `u >= n` **
    fn ith_edge_of(&self, u: Node, i: NumNodes) -> Option<Node>;

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all edges of the graph, grouped by source node
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u).map(move |v| Edge(u, v)))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }
}

/// Adding edges to a graph with a fixed number of nodes
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)` without checking for parallel edges.
    /// Silently ignored if `u` or `v` is out of range.
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds the edge `(u, v)` and fails if `u` or `v` is out of range.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.add_edge(u, v);
        Ok(())
    }

    /// Adds all edges of an iterator
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }

    /// Returns `Err(GraphError::NodeOutOfRange)` if `u` is not a node of the graph
    fn check_vertex(&self, u: Node) -> Result<(), GraphError> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                node_count: self.number_of_nodes(),
            })
        }
    }
}

/// Creating a graph from scratch
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes and no edges
    fn try_new(n: NumNodes) -> Result<Self, GraphError>;

    /// Creates a graph with `n` nodes and the given edges.
    /// ** Panics if `n == Node::MAX` **
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

/// Access to node labels
pub trait GraphLabels: GraphNodeOrder {
    /// Returns the label of `u` if one was set.
    /// ** Panics if `u >= n` **
    fn label(&self, u: Node) -> Option<&str>;

    /// Overwrites the label of `u`. Silently ignored if `u` is out of range.
    fn set_label<S: Into<String>>(&mut self, u: Node, label: S);

    /// Overwrites the label of `u` and fails if `u` is out of range.
    fn try_set_label<S: Into<String>>(&mut self, u: Node, label: S) -> Result<(), GraphError> {
        if !self.has_vertex(u) {
            return Err(GraphError::NodeOutOfRange {
                node: u,
                node_count: self.number_of_nodes(),
            });
        }
        self.set_label(u, label);
        Ok(())
    }
}
