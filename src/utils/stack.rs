//! LIFO stack backed by a growable contiguous array.

use super::NodeSequencer;

/// LIFO stack with amortized `O(1)` push and `O(1)` pop/peek.
#[derive(Debug, Clone)]
pub struct NodeStack<T> {
    items: Vec<T>,
}

impl<T> Default for NodeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeStack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack that can hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns *true* if the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `item` on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top element
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the top element
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Removes all elements but keeps the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> NodeSequencer<T> for NodeStack<T> {
    fn init(u: T) -> Self {
        Self { items: vec![u] }
    }
    fn push(&mut self, u: T) {
        NodeStack::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        NodeStack::pop(self)
    }
    fn peek(&self) -> Option<T> {
        NodeStack::peek(self).cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}
