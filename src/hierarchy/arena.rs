//! Arena-backed hierarchy tree (requires the `arena-storage` feature)
//!
//! Nodes live in a [`SlotMap`] and refer to their children by generational
//! [`NodeKey`]. A key whose node was dropped by an overwrite never resolves
//! again, even if its slot is reused.
//!
//! Overwriting a child slot removes the whole displaced subtree from the
//! arena, so the arena only ever holds nodes reachable from the root.

use slotmap::{new_key_type, SlotMap};

use crate::traits::{Hierarchy, HierarchyError, Order, Side};

new_key_type! {
    /// Generational key of a node in an [`ArenaHierarchyTree`]
    pub struct NodeKey;
}

#[derive(Debug, Clone)]
struct ArenaNode {
    name: String,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl ArenaNode {
    fn leaf(name: String) -> Self {
        Self {
            name,
            left: None,
            right: None,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<NodeKey> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A hierarchy whose nodes are stored contiguously in a slot arena
#[derive(Debug, Clone, Default)]
pub struct ArenaHierarchyTree {
    nodes: SlotMap<NodeKey, ArenaNode>,
    root: Option<NodeKey>,
}

impl ArenaHierarchyTree {
    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    /// Replaces the whole tree with a single root
    pub fn set_root(&mut self, name: impl Into<String>) -> NodeKey {
        self.nodes.clear();
        let key = self.nodes.insert(ArenaNode::leaf(name.into()));
        self.root = Some(key);
        key
    }

    /// Key of the first node named `name` in preorder
    pub fn find(&self, name: &str) -> Option<NodeKey> {
        self.root.and_then(|root| self.find_from(root, name))
    }

    /// Preorder search below `start`
    pub fn find_from(&self, start: NodeKey, name: &str) -> Option<NodeKey> {
        let node = self.nodes.get(start)?;
        if node.name == name {
            return Some(start);
        }
        node.left
            .and_then(|left| self.find_from(left, name))
            .or_else(|| node.right.and_then(|right| self.find_from(right, name)))
    }

    /// Name stored under `key`, or `None` for a stale key
    pub fn name(&self, key: NodeKey) -> Option<&str> {
        self.nodes.get(key).map(|node| node.name.as_str())
    }

    /// Child of `key` on `side`
    pub fn child(&self, key: NodeKey, side: Side) -> Option<NodeKey> {
        let node = self.nodes.get(key)?;
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    /// Names in the subtree under `key`; empty for a stale key
    pub fn walk_key(&self, key: NodeKey, order: Order) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk_into(Some(key), order, &mut names);
        names
    }

    fn walk_into<'a>(&'a self, key: Option<NodeKey>, order: Order, names: &mut Vec<&'a str>) {
        let Some(node) = key.and_then(|key| self.nodes.get(key)) else {
            return;
        };
        if order == Order::Preorder {
            names.push(&node.name);
        }
        self.walk_into(node.left, order, names);
        if order == Order::Inorder {
            names.push(&node.name);
        }
        self.walk_into(node.right, order, names);
        if order == Order::Postorder {
            names.push(&node.name);
        }
    }

    /// Removes `key` and everything below it from the arena
    ///
    /// Returns the number of nodes removed.
    fn remove_subtree(&mut self, key: NodeKey) -> usize {
        let mut removed = 0;
        let mut pending = vec![key];
        while let Some(key) = pending.pop() {
            if let Some(node) = self.nodes.remove(key) {
                removed += 1;
                pending.extend(node.left);
                pending.extend(node.right);
            }
        }
        removed
    }
}

impl Hierarchy for ArenaHierarchyTree {
    fn new() -> Self {
        Self::default()
    }

    fn with_root(name: impl Into<String>) -> Self {
        let mut tree = Self::default();
        tree.set_root(name);
        tree
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn root_name(&self) -> Option<&str> {
        self.root.and_then(|root| self.name(root))
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
        let root = self.root.ok_or(HierarchyError::EmptyTree)?;
        let parent_key = self
            .find_from(root, parent)
            .ok_or_else(|| HierarchyError::ParentNotFound(parent.to_owned()))?;

        let child_key = self.nodes.insert(ArenaNode::leaf(child.to_owned()));
        let displaced = self
            .nodes
            .get_mut(parent_key)
            .and_then(|node| node.slot_mut(side).replace(child_key));

        if let Some(old) = displaced {
            let removed = self.remove_subtree(old);
            log::trace!("{child:?} replaced {removed} nodes as {side} child of {parent:?}");
        }
        Ok(())
    }

    fn walk(&self, order: Order) -> Vec<&str> {
        let mut names = Vec::new();
        self.walk_into(self.root, order, &mut names);
        names
    }

    fn walk_from(&self, name: &str, order: Order) -> Vec<&str> {
        self.find(name)
            .map(|key| self.walk_key(key, order))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_matches_boxed_shape() {
        let mut tree = ArenaHierarchyTree::with_root("A");
        assert!(tree.insert("A", "B", "left"));
        assert!(tree.insert("A", "C", "right"));

        assert_eq!(tree.preorder(), ["A", "B", "C"]);
        assert_eq!(tree.inorder(), ["B", "A", "C"]);
        assert_eq!(tree.postorder(), ["B", "C", "A"]);
    }

    #[test]
    fn test_overwrite_frees_arena_slots() {
        let mut tree = ArenaHierarchyTree::with_root("A");
        tree.insert("A", "B", "left");
        tree.insert("B", "D", "left");
        tree.insert("B", "F", "right");
        assert_eq!(tree.len(), 4);

        let stale = tree.find("D").unwrap();
        assert!(tree.insert("A", "E", "left"));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.preorder(), ["A", "E"]);
        assert_eq!(tree.name(stale), None);
        assert!(tree.walk_key(stale, Order::Preorder).is_empty());
    }

    #[test]
    fn test_child_lookup() {
        let mut tree = ArenaHierarchyTree::with_root("A");
        tree.insert("A", "B", "right");

        let root = tree.root().unwrap();
        assert_eq!(tree.child(root, Side::Left), None);
        let right = tree.child(root, Side::Right).unwrap();
        assert_eq!(tree.name(right), Some("B"));
    }

    #[test]
    fn test_set_root_clears_arena() {
        let mut tree = ArenaHierarchyTree::with_root("A");
        tree.insert("A", "B", "left");
        let old = tree.find("B").unwrap();

        tree.set_root("Z");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_name(), Some("Z"));
        assert_eq!(tree.name(old), None);
    }

    #[test]
    fn test_empty_arena_rejects_insert() {
        let mut tree = ArenaHierarchyTree::new();
        assert_eq!(
            tree.try_insert("A", "B", Side::Left),
            Err(HierarchyError::EmptyTree)
        );
        assert!(!tree.insert("A", "B", "left"));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
