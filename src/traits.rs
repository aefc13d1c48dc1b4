//! Common traits for the crate's data structures
//!
//! This module provides the two seams the rest of the crate is built around:
//!
//! - [`Heap`]: a min-heap surface storing `(priority, item)` pairs
//! - [`Hierarchy`]: a named binary hierarchy with insertion by side and
//!   depth-first traversal
//!
//! Each seam has a default implementation ([`BinaryMinHeap`] and
//! [`HierarchyTree`]); the hierarchy also has an arena-backed variant behind
//! the `arena-storage` feature.
//!
//! [`BinaryMinHeap`]: crate::binary_heap::BinaryMinHeap
//! [`HierarchyTree`]: crate::hierarchy::HierarchyTree

use std::fmt;
use std::str::FromStr;

/// Error type for hierarchy insertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The tree has no root, so there is no parent to attach to
    EmptyTree,
    /// No node carries the requested parent name
    ParentNotFound(String),
    /// The side token was neither `"left"` nor `"right"`
    InvalidSide(String),
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyError::EmptyTree => write!(f, "hierarchy has no root"),
            HierarchyError::ParentNotFound(name) => {
                write!(f, "no node named {name:?} in hierarchy")
            }
            HierarchyError::InvalidSide(token) => {
                write!(f, "side must be \"left\" or \"right\", got {token:?}")
            }
        }
    }
}

impl std::error::Error for HierarchyError {}

/// Which child slot of a parent a new node goes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl FromStr for Side {
    type Err = HierarchyError;

    /// Only the exact lowercase tokens are recognised.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(HierarchyError::InvalidSide(other.to_owned())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Depth-first traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// root, left, right
    Preorder,
    /// left, root, right
    Inorder,
    /// left, right, root
    Postorder,
}

/// Base trait for min-heap / priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use clinic_structures::Heap;
/// use clinic_structures::binary_heap::BinaryMinHeap;
///
/// let mut heap = BinaryMinHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// A binary hierarchy of named nodes
///
/// Names are not required to be unique. Every lookup resolves to the first
/// node with a matching name in preorder.
///
/// Insertion has two forms. [`try_insert`](Hierarchy::try_insert) reports why
/// nothing happened; [`insert`](Hierarchy::insert) takes the side as a string
/// token and silently ignores every rejection, returning only whether the
/// tree changed.
///
/// # Example
///
/// ```rust
/// use clinic_structures::Hierarchy;
/// use clinic_structures::hierarchy::HierarchyTree;
///
/// let mut tree = HierarchyTree::with_root("A");
/// assert!(tree.insert("A", "B", "left"));
/// assert!(tree.insert("A", "C", "right"));
/// assert!(!tree.insert("A", "D", "middle"));
///
/// assert_eq!(tree.preorder(), ["A", "B", "C"]);
/// assert_eq!(tree.inorder(), ["B", "A", "C"]);
/// assert_eq!(tree.postorder(), ["B", "C", "A"]);
/// ```
pub trait Hierarchy {
    /// Creates an empty hierarchy
    fn new() -> Self;

    /// Creates a hierarchy holding a single root node
    fn with_root(name: impl Into<String>) -> Self;

    /// Returns true if there is no root
    fn is_empty(&self) -> bool;

    /// Number of nodes reachable from the root
    fn len(&self) -> usize;

    /// Name of the root node, if any
    fn root_name(&self) -> Option<&str>;

    /// Returns true if some node carries `name`
    fn contains(&self, name: &str) -> bool;

    /// Attaches a new leaf named `child` under the first node named `parent`
    ///
    /// Whatever subtree previously occupied that side is dropped.
    ///
    /// # Errors
    /// - [`HierarchyError::EmptyTree`] if there is no root
    /// - [`HierarchyError::ParentNotFound`] if no node is named `parent`
    fn try_insert(&mut self, parent: &str, child: &str, side: Side)
        -> Result<(), HierarchyError>;

    /// Names visited from the root in the given order
    fn walk(&self, order: Order) -> Vec<&str>;

    /// Names visited from the first node named `name`
    ///
    /// Empty when no such node exists.
    fn walk_from(&self, name: &str, order: Order) -> Vec<&str>;

    /// Checks that `parent` can receive a child
    fn locate_parent(&self, parent: &str) -> Result<(), HierarchyError> {
        if self.is_empty() {
            return Err(HierarchyError::EmptyTree);
        }
        if !self.contains(parent) {
            return Err(HierarchyError::ParentNotFound(parent.to_owned()));
        }
        Ok(())
    }

    /// Silent insertion keyed by a side token
    ///
    /// An empty tree, an unknown parent or a side other than `"left"` /
    /// `"right"` leaves the tree untouched. The return value says whether the
    /// child was attached; rejections are only visible as `debug` log records.
    fn insert(&mut self, parent: &str, child: &str, side: &str) -> bool {
        // Parent checks come before the side token is looked at.
        let outcome = match side.parse::<Side>() {
            Ok(side) => self.try_insert(parent, child, side),
            Err(invalid) => self.locate_parent(parent).and(Err(invalid)),
        };

        match outcome {
            Ok(()) => true,
            Err(err) => {
                log::debug!("ignored insert of {child:?} under {parent:?}: {err}");
                false
            }
        }
    }

    /// Root, left, right
    fn preorder(&self) -> Vec<&str> {
        self.walk(Order::Preorder)
    }

    /// Left, root, right
    fn inorder(&self) -> Vec<&str> {
        self.walk(Order::Inorder)
    }

    /// Left, right, root
    fn postorder(&self) -> Vec<&str> {
        self.walk(Order::Postorder)
    }
}
