use crate::error::{Error, Result};

/// Array-backed binary min-heap of `(priority, node)` entries with a fixed
/// capacity chosen at creation time.
///
/// There is no decrease-key: the solver pushes a fresh entry whenever a
/// node's distance improves and discards outdated entries at pop time
/// (lazy deletion), so the heap may hold several entries for one node.
#[derive(Debug)]
pub struct BinaryMinHeap {
    entries: Vec<(u64, u32)>,
    capacity: usize,
}

impl BinaryMinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, priority: u64, node: u32) -> Result<()> {
        if self.entries.len() == self.capacity {
            return Err(Error::QueueOverflow {
                capacity: self.capacity,
            });
        }
        self.entries.push((priority, node));
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum-priority entry, or `None` when the
    /// heap is empty. Ties are broken arbitrarily by heap shape.
    pub fn pop(&mut self) -> Option<(u64, u32)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent].0 <= self.entries[idx].0 {
                break;
            }
            self.entries.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}
