/*!
`graphread` loads directed graphs from a compact text encoding and runs two traversals on them:
- **breadth-first distances**: minimum number of edges and a shortest-path predecessor for every
  node reachable from a source,
- **topological order**: reverse postorder of an iterative depth-first search.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Every node may carry a label. Edges are directed, stored per source node and may be parallel.

A [`Graph`](crate::repr::Graph) is built once (usually by the loader) and afterwards only its
labels and its traversal state change. The traversal state (`visited`, `predecessor`,
`distance` per node) lives in a [`TraversalState`](crate::repr::TraversalState): the graph
embeds one for single runs, and independent instances allow several analyses over one shared
`&Graph`.

# Input Format

```text
<node_count> <edge_count>
<src_id> <dst_id> ["label"]
...
```

Records referencing ids outside `0..node_count` are parsed but dropped; the declared edge count
is not enforced unless requested via [`GraphLoader`](crate::io::GraphLoader).

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph
  representation,
- [`algo`] includes the traversal engines, also available as methods on graphs
  (`graph.bfs(source)`, `graph.topological_order()`),
- [`io`] includes the graph loader, the name file reader and the result writer,
- [`utils`] includes the queue and stack used by the engines.

```
use graphread::{prelude::*, algo::*, io::load};

let mut graph = load(b"3 2\n0 1 \"hub\"\n1 2\n").unwrap();

graph.bfs(0).unwrap();
assert_eq!(graph.distance_of(2), Some(2));
assert_eq!(graph.topological_order(), vec![0, 1, 2]);
assert_eq!(graph.label(0), Some("hub"));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `graphread::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
