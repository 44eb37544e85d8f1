mod node;
pub mod traversal;

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::recipe::Keyed;
use node::{Link, Node};

pub use traversal::{Traversal, TraversalOrder};

/// A binary search tree over values that expose an ordered key.
///
/// Invariant: for every node N, keys in N's left subtree are less than N's
/// key, keys in its right subtree are greater than or equal to it.
///
/// The tree itself does not enforce unique keys. An insert with a key that is
/// already present goes to the right of the existing node and both values are
/// kept; `search` and `remove` act on whichever copy they reach first.
/// Callers that need uniqueness check with `contains` before inserting.
///
/// Search, insert, remove: O(h) where h is the current height. No automatic
/// rebalancing; sorted input produces a list-shaped tree.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> OrderedTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        node::release(self.root.take());
        self.len = 0;
    }

    /// Lazy traversal in the requested order. Borrowing only; call again to restart.
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(self.root.as_deref(), order, self.len)
    }

    /// In-order traversal, i.e. ascending by key.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Longest root-to-leaf path counted in nodes. 0 for an empty tree.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// True when, at every node, the two subtree heights differ by at most one.
    pub fn is_balanced(&self) -> bool {
        node::balanced_height(&self.root).is_some()
    }

    /// Consume the tree, returning its values in ascending key order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cur = self.root.take();
        self.len = 0;

        loop {
            while let Some(mut node) = cur {
                cur = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    cur = node.right.take();
                    out.push(node.value);
                }
                None => break,
            }
        }
        out
    }
}

impl<T: Keyed> OrderedTree<T> {
    /// Place `value` at the first empty slot on its search path.
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value.key() < node.value.key() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Find the value stored under `key`.
    pub fn search(&self, key: &T::Key) -> Option<&T> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.value.key()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.search(key).is_some()
    }

    /// Unlink the value stored under `key` and hand it back.
    ///
    /// A node with two children keeps its place in the tree and takes over
    /// the value of its in-order successor; the successor's own node is the
    /// one that gets unlinked.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let mut link = &mut self.root;
        loop {
            let ord = key.cmp(link.as_ref()?.value.key());
            link = match ord {
                Ordering::Equal => break,
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }

        let has_two_children = link
            .as_ref()
            .is_some_and(|node| node.left.is_some() && node.right.is_some());
        let removed = if has_two_children {
            let node = link.as_mut()?;
            let successor = Self::take_min(&mut node.right)?;
            mem::replace(&mut node.value, successor)
        } else {
            let mut node = link.take()?;
            *link = node.left.take().or_else(|| node.right.take());
            node.value
        };

        self.len -= 1;
        Some(removed)
    }

    /// Unlink the leftmost node below `link`, splicing its right child into its place.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.value)
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Keyed> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Keyed> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}
