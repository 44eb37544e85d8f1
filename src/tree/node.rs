/// An owned, possibly-empty child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single cell of the tree. Owns its value and both subtrees; dropping a
/// node drops everything below it.
///
/// ```text
///            [M]
///           /   \
///        [B]     [T]
///       /   \       \
///     [A]   [D]     [W]
/// ```
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Height of the subtree behind `link`: 0 when empty, 1 for a lone leaf.
/// Walks with an explicit stack so list-shaped trees don't exhaust the call stack.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
    stack.extend(link.as_deref().map(|node| (node, 1)));

    let mut max = 0;
    while let Some((node, depth)) = stack.pop() {
        max = max.max(depth);
        stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
        stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
    }
    max
}

/// Returns the subtree height if every node below `link` has children whose
/// heights differ by at most one, `None` otherwise.
///
/// Post-order walk on an explicit stack. A node is pushed once to expand its
/// children and once more to combine their heights; finished subtree heights
/// wait on `heights`, the right one on top of the left one.
pub(crate) fn balanced_height<T>(link: &Link<T>) -> Option<usize> {
    let mut stack: Vec<(&Node<T>, bool)> = Vec::new();
    stack.extend(link.as_deref().map(|node| (node, false)));
    let mut heights: Vec<usize> = Vec::new();

    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right.as_deref().map(|n| (n, false)));
            stack.extend(node.left.as_deref().map(|n| (n, false)));
            continue;
        }

        let right = if node.right.is_some() { heights.pop()? } else { 0 };
        let left = if node.left.is_some() { heights.pop()? } else { 0 };
        if left.abs_diff(right) > 1 {
            return None;
        }
        heights.push(left.max(right) + 1);
    }
    Some(heights.pop().unwrap_or(0))
}

/// Tears down a subtree one node at a time, with no recursion. A tree built
/// from sorted input is a linked list as deep as it is long.
pub(crate) fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// `0 -> 1 -> ... -> n-1`, every node hanging off its parent's right slot.
/// Built directly; inserting sorted keys one by one is quadratic.
#[cfg(test)]
pub(crate) fn chain(n: usize) -> Link<usize> {
    let mut root: Link<usize> = None;
    for i in (0..n).rev() {
        let mut node = Node::leaf(i);
        node.right = root.take();
        root = Some(node);
    }
    root
}
