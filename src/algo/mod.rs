/*!
# Graph Algorithms

The traversal engines of this crate:
- [`bfs_with_state`]: single-source breadth-first distances and predecessors,
- [`topological_order_with_state`]: iterative depth-first search producing a reverse postorder,
- [`Traversal`]: both engines as methods on graphs with an embedded traversal state.

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use graphread::algo::*;
```
*/

mod bfs;
mod topo;
mod traversal;

use crate::{prelude::*, utils::*};

pub use bfs::*;
pub use topo::*;
pub use traversal::*;
