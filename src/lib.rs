//! Clinic data structures
//!
//! This crate provides two small, independent in-memory structures:
//!
//! - **Supervisory hierarchy** ([`hierarchy::HierarchyTree`]): a binary tree of
//!   named members supporting insertion under a named parent and preorder,
//!   inorder and postorder traversal
//! - **Triage queue** ([`triage::TriageQueue`]): a priority queue of patients
//!   served lowest urgency first, backed by an array binary min-heap
//!   ([`binary_heap::BinaryMinHeap`])
//!
//! # Features
//!
//! - `arena-storage`: adds [`hierarchy::arena::ArenaHierarchyTree`], the same
//!   hierarchy stored in a `slotmap` arena
//!
//! # Example
//!
//! ```rust
//! use clinic_structures::hierarchy::HierarchyTree;
//! use clinic_structures::triage::{Patient, TriageQueue};
//! use clinic_structures::Hierarchy;
//!
//! let mut tree = HierarchyTree::with_root("Dr. Croft");
//! tree.insert("Dr. Croft", "Dr. Phan", "left");
//! assert_eq!(tree.postorder(), ["Dr. Phan", "Dr. Croft"]);
//!
//! let mut queue = TriageQueue::new();
//! queue.insert(Patient::new("Jordan", 3));
//! queue.insert(Patient::new("Taylor", 1));
//! assert_eq!(queue.extract_min().map(|p| p.urgency()), Some(1));
//! ```

pub mod binary_heap;
pub mod hierarchy;
pub mod traits;
pub mod triage;

// Re-export the main traits for convenience
pub use traits::{Heap, Hierarchy, HierarchyError, Order, Side};
