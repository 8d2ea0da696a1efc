//! Array-backed binary min-heap with comparison accounting
//!
//! Every mutating operation returns the number of priority comparisons it
//! performed so callers can fold heap work into their operation counter.
//! Stale entries are never removed eagerly; callers skip them on extraction.

use crate::error::{PathraceError, Result};

/// Heap entry: a node id keyed by its tentative distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub node: usize,
    pub priority: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MinPriorityQueue {
    heap: Vec<QueueEntry>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl MinPriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Live entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.first()
    }

    /// Insert `node` at `priority`; returns the sift-up comparison count.
    pub fn insert(&mut self, node: usize, priority: u64) -> u64 {
        self.heap.push(QueueEntry { node, priority });
        self.sift_up(self.heap.len() - 1)
    }

    /// Remove the minimum entry; returns it with the sift-down comparison count.
    pub fn extract_min(&mut self) -> Result<(QueueEntry, u64)> {
        let last = self.heap.pop().ok_or(PathraceError::EmptyQueue)?;
        if self.heap.is_empty() {
            return Ok((last, 0));
        }

        let min = std::mem::replace(&mut self.heap[0], last);
        let cost = self.sift_down(0);
        Ok((min, cost))
    }

    fn sift_up(&mut self, mut index: usize) -> u64 {
        let mut cost = 0;
        while index > 0 {
            let parent_index = parent(index);
            cost += 1;
            if self.heap[index].priority >= self.heap[parent_index].priority {
                break;
            }
            self.heap.swap(index, parent_index);
            index = parent_index;
        }
        cost
    }

    fn sift_down(&mut self, mut index: usize) -> u64 {
        let len = self.heap.len();
        let mut cost = 0;

        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;

            if left < len {
                cost += 1;
                if self.heap[left].priority < self.heap[smallest].priority {
                    smallest = left;
                }
            }

            // Strict comparison: the left child wins ties with the right.
            if right < len {
                cost += 1;
                if self.heap[right].priority < self.heap[smallest].priority {
                    smallest = right;
                }
            }

            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }

        cost
    }
}
