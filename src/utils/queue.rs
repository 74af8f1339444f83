/*!
# Ring-Buffer Queue

A FIFO queue over a growable ring buffer. Pushing into a full buffer doubles its capacity and
re-linearises the (possibly wrapped) contents, so elements keep their insertion order across
reallocations.
*/

use super::NodeSequencer;

/// Capacity of the first allocation
const MIN_CAPACITY: usize = 8;

/// FIFO queue with amortized `O(1)` push and `O(1)` pop.
#[derive(Debug, Clone)]
pub struct NodeQueue<T> {
    buffer: Vec<T>,
    head: usize,
    len: usize,
}

impl<T: Copy + Default> Default for NodeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> NodeQueue<T> {
    /// Creates an empty queue without allocating
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty queue that can hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![T::default(); capacity],
            head: 0,
            len: 0,
        }
    }

    /// Number of buffered elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the queue can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Appends `item` to the back of the queue
    pub fn push(&mut self, item: T) {
        if self.len == self.buffer.len() {
            self.grow();
        }

        let tail = (self.head + self.len) % self.buffer.len();
        self.buffer[tail] = item;
        self.len += 1;
    }

    /// Removes and returns the front element or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let item = self.buffer[self.head];
        self.head = (self.head + 1) % self.buffer.len();
        self.len -= 1;
        Some(item)
    }

    /// Returns the front element without removing it
    pub fn peek(&self) -> Option<T> {
        (self.len > 0).then(|| self.buffer[self.head])
    }

    /// Removes all elements but keeps the allocation
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Doubles the capacity. The buffered elements `head..` and `..head` (wrapped part) are
    /// copied to the front of the new buffer in queue order.
    fn grow(&mut self) {
        let capacity = self.buffer.len();
        let new_capacity = (capacity * 2).max(MIN_CAPACITY);
        let mut buffer = vec![T::default(); new_capacity];

        let first = self.len.min(capacity - self.head);
        buffer[..first].copy_from_slice(&self.buffer[self.head..self.head + first]);
        buffer[first..self.len].copy_from_slice(&self.buffer[..self.len - first]);

        self.buffer = buffer;
        self.head = 0;
    }
}

impl<T: Copy + Default> NodeSequencer<T> for NodeQueue<T> {
    fn init(u: T) -> Self {
        let mut queue = Self::new();
        queue.push(u);
        queue
    }
    fn push(&mut self, u: T) {
        NodeQueue::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        NodeQueue::pop(self)
    }
    fn peek(&self) -> Option<T> {
        NodeQueue::peek(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}
