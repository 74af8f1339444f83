/*!
# Utilities

Scratch containers used by the traversal engines:
- [`NodeQueue`]: growable ring-buffer FIFO queue (breadth-first search),
- [`NodeStack`]: growable LIFO stack (depth-first search).

Both implement [`NodeSequencer`], the abstraction over "nodes still to be processed".
*/

pub mod queue;
pub mod stack;

pub use queue::NodeQueue;
pub use stack::NodeStack;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited" items during a traversal.
/// Different implementations determine the traversal order:
///
/// - [`NodeQueue`] -> queue semantics -> **BFS**
/// - [`NodeStack`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns a copy of the next item without removing it.
    fn peek(&self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}
