/*!
# Graph Representation

- [`Graph`]: the directed graph store with labels and an embedded traversal state.
- [`TraversalState`]: per-node traversal fields kept in a side structure indexed by node id.
*/

use crate::{ops::*, *};

mod graph;
mod state;

pub use graph::*;
pub use state::*;
