use std::sync::{Arc, Mutex};
use std::collections::VecDeque;

/// core queue structure: handles only FIFO enqueue/peek/dequeue logic
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Enqueue an item at the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        // --post operation assertion
        assert!(self.items.len() > 0, "Queue must have at least one item after enqueue");
    }

    /// Dequeue the front item; None when empty
    pub fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = self.items.pop_front();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.items.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    /// Look at the front item without removing it; None when empty
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around the queue
pub type SafeQueue<T> = Arc<Mutex<Queue<T>>>;

/// Create a fresh shared queue handle
pub fn shared<T>() -> SafeQueue<T> {
    Arc::new(Mutex::new(Queue::new()))
}
