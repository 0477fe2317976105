//! Owned AVL nodes and the rebalancing primitives.
//!
//! Every function here takes subtrees by value and hands back the new
//! subtree root, so rotations are plain moves between `Option<Box<_>>` slots.

use std::cmp::Ordering;

use super::Keyed;

/// An exclusively owned, possibly empty subtree.
pub(super) type Link<R> = Option<Box<Node<R>>>;

/// Internal node of the AVL tree.
#[derive(Clone)]
pub(super) struct Node<R> {
    pub(super) record: R,
    pub(super) left: Link<R>,
    pub(super) right: Link<R>,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(super) height: usize,
}

impl<R> Node<R> {
    /// Creates a leaf.
    pub(super) const fn leaf(record: R) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Recomputes the cached height from the children.
    pub(super) fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }

    /// `height(left) - height(right)`.
    #[allow(clippy::cast_possible_wrap)]
    pub(super) fn balance_factor(&self) -> isize {
        height(self.left.as_deref()) as isize - height(self.right.as_deref()) as isize
    }
}

/// Height of an optional subtree, `0` when absent.
pub(super) fn height<R>(node: Option<&Node<R>>) -> usize {
    node.map_or(0, |node| node.height)
}

// =============================================================================
// Rotations
// =============================================================================

/// Promotes the left child to subtree root.
fn rotate_right<R: Keyed>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    tracing::trace!(target: "avlbook::tree", pivot = pivot.record.key(), "rotate right");
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Promotes the right child to subtree root.
fn rotate_left<R: Keyed>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    tracing::trace!(target: "avlbook::tree", pivot = pivot.record.key(), "rotate left");
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restores the AVL property at `node`, assuming both children already hold it.
///
/// Handles the four classic cases:
/// - Left-Left: single right rotation
/// - Left-Right: left rotation on the left child, then right rotation
/// - Right-Right: single left rotation
/// - Right-Left: right rotation on the right child, then left rotation
pub(super) fn rebalance<R: Keyed>(mut node: Box<Node<R>>) -> Box<Node<R>> {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if factor < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

// =============================================================================
// Structural operations
// =============================================================================

/// Inserts `record` below `link`.
///
/// Returns the new subtree root and, when the key was already present, the
/// rejected record. The existing record is never touched.
pub(super) fn insert<R: Keyed>(link: Link<R>, record: R) -> (Box<Node<R>>, Option<R>) {
    let Some(mut node) = link else {
        return (Box::new(Node::leaf(record)), None);
    };

    match record.key().cmp(node.record.key()) {
        Ordering::Less => {
            let (left, rejected) = insert(node.left.take(), record);
            node.left = Some(left);
            if rejected.is_some() {
                return (node, rejected);
            }
        }
        Ordering::Greater => {
            let (right, rejected) = insert(node.right.take(), record);
            node.right = Some(right);
            if rejected.is_some() {
                return (node, rejected);
            }
        }
        Ordering::Equal => return (node, Some(record)),
    }

    (rebalance(node), None)
}

/// Removes the record stored under `key` below `link`.
///
/// Returns the new subtree and the removed record, if any. When the matched
/// node has two children its record is replaced by the in-order successor's,
/// and the successor is then removed from the right subtree.
pub(super) fn remove<R: Keyed>(link: Link<R>, key: &str) -> (Link<R>, Option<R>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    match key.cmp(node.record.key()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            if removed.is_none() {
                return (Some(node), None);
            }
            (Some(rebalance(node)), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            if removed.is_none() {
                return (Some(node), None);
            }
            (Some(rebalance(node)), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => (child, Some(node.record)),
            (Some(left), Some(right)) => {
                let successor_key = leftmost(&right).record.key().to_owned();
                let (right, successor) = remove(Some(right), &successor_key);
                node.left = Some(left);
                node.right = right;
                let removed =
                    successor.map(|successor| std::mem::replace(&mut node.record, successor));
                (Some(rebalance(node)), removed)
            }
        },
    }
}

/// Follows left links down to the smallest node of the subtree.
pub(super) fn leftmost<R>(node: &Node<R>) -> &Node<R> {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

/// Follows right links down to the largest node of the subtree.
pub(super) fn rightmost<R>(node: &Node<R>) -> &Node<R> {
    let mut current = node;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }
    current
}

/// Read-only descent by key.
pub(super) fn find<'a, R: Keyed>(link: Option<&'a Node<R>>, key: &str) -> Option<&'a R> {
    let mut current = link;
    while let Some(node) = current {
        current = match key.cmp(node.record.key()) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(&node.record),
        };
    }
    None
}
