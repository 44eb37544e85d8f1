use std::iter::FusedIterator;

use super::node::Node;

/// Visitation order for [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// node, left, right
    PreOrder,
    /// left, node, right (sorted by key)
    InOrder,
    /// left, right, node
    PostOrder,
}

enum Frame<'a, T> {
    /// Subtree not yet expanded.
    Visit(&'a Node<T>),
    /// Value ready to be handed out.
    Yield(&'a T),
}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Frame<'_, T> {}

/// Lazy walk over a tree in one of the three depth-first orders.
///
/// Uses an explicit stack instead of recursion: each subtree is pushed as a
/// `Visit` frame and expanded into its children and its own value in the
/// reverse of the order they should come out. The tree is only borrowed, so a
/// traversal can be cloned or restarted at any point.
pub struct Traversal<'a, T> {
    order: TraversalOrder,
    stack: Vec<Frame<'a, T>>,
    remaining: usize,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: TraversalOrder, len: usize) -> Self {
        Traversal {
            order,
            stack: root.map(Frame::Visit).into_iter().collect(),
            remaining: len,
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    fn expand(&mut self, node: &'a Node<T>) {
        let left = node.left.as_deref().map(Frame::Visit);
        let right = node.right.as_deref().map(Frame::Visit);
        let this = Frame::Yield(&node.value);

        // Pushed in reverse: the last frame pushed is the first one out.
        match self.order {
            TraversalOrder::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(this);
            }
            TraversalOrder::InOrder => {
                self.stack.extend(right);
                self.stack.push(this);
                self.stack.extend(left);
            }
            TraversalOrder::PostOrder => {
                self.stack.push(this);
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Traversal {
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Yield(value) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(value);
                }
                Frame::Visit(node) => self.expand(node),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
