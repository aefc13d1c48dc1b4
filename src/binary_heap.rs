//! Array-backed binary min-heap
//!
//! Elements live in a single `Vec` laid out level by level: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//! Every operation touches one root-to-leaf path.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Tie-breaking
//!
//! Both sifts move an element only when the comparison is strict. While
//! sifting down, the current position wins ties, and the left child wins a
//! tie against the right child. Drain order for equal priorities is therefore
//! fully determined by insertion order.
//!
//! # Example
//!
//! ```rust
//! use clinic_structures::Heap;
//! use clinic_structures::binary_heap::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new();
//! heap.push(3, "three");
//! heap.push(1, "one");
//! heap.push(2, "two");
//!
//! assert_eq!(heap.peek(), Some((&1, &"one")));
//! assert_eq!(heap.pop(), Some((1, "one")));
//! assert_eq!(heap.pop(), Some((2, "two")));
//! assert_eq!(heap.pop(), Some((3, "three")));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::Heap;

/// A binary min-heap of (priority, item) pairs
///
/// The element with the smallest priority is always at index 0.
#[derive(Debug, Clone)]
pub struct BinaryMinHeap<T, P: Ord> {
    /// The heap data stored as a vector of (priority, item) pairs
    data: Vec<(P, T)>,
}

impl<T, P: Ord> Heap<T, P> for BinaryMinHeap<T, P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }

        // The tail element fills the root slot and the array shrinks by one.
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }
}

impl<T, P: Ord> BinaryMinHeap<T, P> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// The backing array in storage order
    ///
    /// Index 0 is the minimum; the rest is only partially ordered.
    pub fn as_slice(&self) -> &[(P, T)] {
        &self.data
    }

    /// Returns true if every parent's priority is `<=` its children's
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.data[parent].0 <= self.data[child].0
        })
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: Ord> Default for BinaryMinHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for BinaryMinHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        for (priority, item) in iter {
            heap.push(priority, item);
        }
        heap
    }
}
