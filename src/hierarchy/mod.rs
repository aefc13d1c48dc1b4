//! Supervisory hierarchy as an owning binary tree
//!
//! Every [`Node`] owns its two optional children through `Box`, so the tree is
//! a strict ownership tree: no sharing, no parent pointers, no cycles. Dropping
//! a child slot drops the whole subtree below it.
//!
//! Lookups are depth-first in preorder and return the first node whose name
//! matches. Duplicate names are allowed; nodes after the first match with the
//! same name are unreachable by name but still appear in traversals.
//!
//! With the `arena-storage` feature, [`arena::ArenaHierarchyTree`] offers the
//! same contract on top of a generational slot arena.
//!
//! # Example
//!
//! ```rust
//! use clinic_structures::Hierarchy;
//! use clinic_structures::hierarchy::{inorder, HierarchyTree};
//!
//! let mut tree = HierarchyTree::with_root("Dr. Croft");
//! tree.insert("Dr. Croft", "Dr. Goldsmith", "right");
//! tree.insert("Dr. Croft", "Dr. Phan", "left");
//! tree.insert("Dr. Phan", "Dr. Morgan", "left");
//!
//! assert_eq!(
//!     tree.preorder(),
//!     ["Dr. Croft", "Dr. Phan", "Dr. Morgan", "Dr. Goldsmith"]
//! );
//!
//! // Traversals also start from any subtree.
//! let phan = tree.find("Dr. Phan");
//! assert_eq!(inorder(phan), ["Dr. Morgan", "Dr. Phan"]);
//! ```

#[cfg(feature = "arena-storage")]
pub mod arena;

use crate::traits::{Hierarchy, HierarchyError, Order, Side};

/// A named member of the hierarchy and the subtrees it supervises
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Creates a leaf
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The child on the given side
    pub fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Installs `child` on `side`, returning whatever subtree was there
    pub fn replace_child(&mut self, side: Side, child: Node) -> Option<Node> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        slot.replace(Box::new(child)).map(|old| *old)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree, including `self`
    ///
    /// Never zero, so there is no `is_empty`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }

    /// First node named `name` in preorder
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        if let Some(found) = self.left().and_then(|left| left.find(name)) {
            return Some(found);
        }
        self.right().and_then(|right| right.find(name))
    }

    /// Mutable counterpart of [`find`](Node::find)
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.name == name {
            return Some(self);
        }
        if let Some(found) = self.left.as_deref_mut().and_then(|left| left.find_mut(name)) {
            return Some(found);
        }
        self.right.as_deref_mut().and_then(|right| right.find_mut(name))
    }

    /// Names in this subtree in the given order
    pub fn walk(&self, order: Order) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk_into(order, &mut names);
        names
    }

    pub fn preorder(&self) -> Vec<&str> {
        self.walk(Order::Preorder)
    }

    pub fn inorder(&self) -> Vec<&str> {
        self.walk(Order::Inorder)
    }

    pub fn postorder(&self) -> Vec<&str> {
        self.walk(Order::Postorder)
    }

    fn walk_into<'a>(&'a self, order: Order, names: &mut Vec<&'a str>) {
        if order == Order::Preorder {
            names.push(&self.name);
        }
        if let Some(left) = self.left() {
            left.walk_into(order, names);
        }
        if order == Order::Inorder {
            names.push(&self.name);
        }
        if let Some(right) = self.right() {
            right.walk_into(order, names);
        }
        if order == Order::Postorder {
            names.push(&self.name);
        }
    }
}

// Subtrees are torn down with an explicit stack so that dropping a long
// chain does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Preorder search starting at `node`
///
/// Returns `None` when `node` is `None` or nothing matches.
pub fn find_node<'a>(node: Option<&'a Node>, name: &str) -> Option<&'a Node> {
    node.and_then(|node| node.find(name))
}

/// Root, left, right. Empty for `None`.
pub fn preorder(node: Option<&Node>) -> Vec<&str> {
    node.map(Node::preorder).unwrap_or_default()
}

/// Left, root, right. Empty for `None`.
pub fn inorder(node: Option<&Node>) -> Vec<&str> {
    node.map(Node::inorder).unwrap_or_default()
}

/// Left, right, root. Empty for `None`.
pub fn postorder(node: Option<&Node>) -> Vec<&str> {
    node.map(Node::postorder).unwrap_or_default()
}

/// A hierarchy rooted at an optional boxed [`Node`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyTree {
    root: Option<Node>,
}

impl HierarchyTree {
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Replaces the root, returning the previous tree
    pub fn set_root(&mut self, root: Node) -> Option<Node> {
        self.root.replace(root)
    }

    /// First node named `name` in preorder
    pub fn find(&self, name: &str) -> Option<&Node> {
        find_node(self.root(), name)
    }
}

impl Hierarchy for HierarchyTree {
    fn new() -> Self {
        Self { root: None }
    }

    fn with_root(name: impl Into<String>) -> Self {
        Self {
            root: Some(Node::new(name)),
        }
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.root().map_or(0, Node::len)
    }

    fn root_name(&self) -> Option<&str> {
        self.root().map(Node::name)
    }

    fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn try_insert(
        &mut self,
        parent: &str,
        child: &str,
        side: Side,
    ) -> Result<(), HierarchyError> {
        let root = self.root.as_mut().ok_or(HierarchyError::EmptyTree)?;
        let parent_node = root
            .find_mut(parent)
            .ok_or_else(|| HierarchyError::ParentNotFound(parent.to_owned()))?;

        if let Some(dropped) = parent_node.replace_child(side, Node::new(child)) {
            log::trace!(
                "{child:?} replaced {:?} ({} nodes) as {side} child of {parent:?}",
                dropped.name(),
                dropped.len()
            );
        }
        Ok(())
    }

    fn walk(&self, order: Order) -> Vec<&str> {
        self.root().map(|root| root.walk(order)).unwrap_or_default()
    }

    fn walk_from(&self, name: &str, order: Order) -> Vec<&str> {
        self.find(name).map(|node| node.walk(order)).unwrap_or_default()
    }
}
