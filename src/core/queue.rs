//! Blocking session queue.
//!
//! The sole ownership-transfer channel between the interactive paths
//! and the worker. Unbounded, FIFO, no priorities, no deduplication;
//! in practice it never holds more than a couple of items.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, PoisonError};

/// A thread-safe blocking FIFO.
///
/// `push` never blocks the producer; `wait_pop` blocks the consumer
/// until an item is available. Every pushed item is popped exactly
/// once, in FIFO order, even under concurrent pushes.
#[derive(Debug)]
pub struct BlockingQueue<T> {
    items: Mutex<VecDeque<T>>,
    ready: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        }
    }

    /// Append an item to the tail and wake one blocked consumer.
    pub fn push(&self, item: T) {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.push_back(item);
        drop(items);
        self.ready.notify_one();
    }

    /// Block until an item is available, then remove and return the head.
    pub fn wait_pop(&self) -> T {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(item) = items.pop_front() {
                return item;
            }
            items = self
                .ready
                .wait(items)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Number of queued items. Only a snapshot; other threads may push
    /// or pop immediately after.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the queue is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_fifo_order() {
        let queue = BlockingQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);

        assert_eq!(queue.wait_pop(), 1);
        assert_eq!(queue.wait_pop(), 2);
        assert_eq!(queue.wait_pop(), 3);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_wait_pop_blocks_until_push() {
        let queue = Arc::new(BlockingQueue::new());

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.wait_pop())
        };

        // Give the consumer time to park on the condvar.
        thread::sleep(Duration::from_millis(50));
        assert!(!consumer.is_finished());

        queue.push(42);
        assert_eq!(consumer.join().unwrap(), 42);
    }

    #[test]
    fn test_concurrent_producers_all_items_popped_once() {
        let queue = Arc::new(BlockingQueue::new());
        let producers: Vec<_> = (0..4_usize)
            .map(|p| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..100 {
                        queue.push(p * 100 + i);
                    }
                })
            })
            .collect();

        for producer in producers {
            producer.join().unwrap();
        }

        let mut seen = vec![false; 400];
        for _ in 0..400 {
            let item: usize = queue.wait_pop();
            assert!(!seen[item], "item {item} popped twice");
            seen[item] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_per_producer_order_preserved() {
        let queue = Arc::new(BlockingQueue::new());
        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..50 {
                    queue.push(i);
                }
            })
        };
        producer.join().unwrap();

        for expected in 0..50 {
            assert_eq!(queue.wait_pop(), expected);
        }
    }
}
