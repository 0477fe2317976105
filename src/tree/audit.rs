//! Structural self-check for a [`BalancedTree`](super::BalancedTree).

use thiserror::Error;

use super::Keyed;
use super::node::{Node, height};

/// The first broken invariant found by [`BalancedTree::audit`](super::BalancedTree::audit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A node's subtrees differ in height by more than one.
    #[error("node {key} is unbalanced (balance factor {factor})")]
    Unbalanced {
        /// Key of the offending node.
        key: String,
        /// `height(left) - height(right)` at that node.
        factor: isize,
    },
    /// A node's cached height disagrees with its children.
    #[error("node {key} caches height {cached}, expected {actual}")]
    StaleHeight {
        /// Key of the offending node.
        key: String,
        /// Height stored in the node.
        cached: usize,
        /// Height recomputed from the children.
        actual: usize,
    },
    /// In-order traversal produced a key that is not strictly greater than
    /// the previous one.
    #[error("key {key} follows {previous} in traversal order")]
    OutOfOrder {
        /// The key visited first.
        previous: String,
        /// The key visited next.
        key: String,
    },
    /// The cached entry count disagrees with the number of nodes.
    #[error("tree caches length {cached}, but holds {actual} nodes")]
    LengthMismatch {
        /// Length stored in the tree.
        cached: usize,
        /// Number of reachable nodes.
        actual: usize,
    },
}

/// Walks the subtree bottom-up, checking heights and balance, and tracks the
/// last visited key to check ordering.
///
/// Returns the number of nodes in the subtree.
pub(super) fn check<'a, R: Keyed>(
    node: Option<&'a Node<R>>,
    previous: &mut Option<&'a str>,
) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };

    let left_count = check(node.left.as_deref(), previous)?;

    let key = node.record.key();
    if let Some(previous_key) = *previous
        && previous_key >= key
    {
        return Err(InvariantViolation::OutOfOrder {
            previous: previous_key.to_owned(),
            key: key.to_owned(),
        });
    }
    *previous = Some(key);

    let right_count = check(node.right.as_deref(), previous)?;

    let actual = 1 + height(node.left.as_deref()).max(height(node.right.as_deref()));
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            key: key.to_owned(),
            cached: node.height,
            actual,
        });
    }

    let factor = node.balance_factor();
    if !(-1..=1).contains(&factor) {
        return Err(InvariantViolation::Unbalanced {
            key: key.to_owned(),
            factor,
        });
    }

    Ok(left_count + 1 + right_count)
}
