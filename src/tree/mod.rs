//! Height-balanced (AVL) ordered map keyed by strings.
//!
//! This module provides [`BalancedTree`], an ordered collection of records
//! that each carry their own string key.
//!
//! # Overview
//!
//! `BalancedTree` is an AVL tree: a binary search tree in which the heights
//! of the two subtrees of every node differ by at most one.
//!
//! - O(log N) find
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) first/last
//! - O(1) len and `is_empty`
//!
//! Mutating operations consume the tree and return the updated tree along
//! with an explicit outcome, so a duplicate insert or a missing key is never
//! silently dropped.
//!
//! # Examples
//!
//! ```rust
//! use avlbook::{BalancedTree, Contact, InsertOutcome, RemoveOutcome};
//!
//! let tree = BalancedTree::new();
//! let (tree, outcome) = tree.insert(Contact::new("carol", "555-0102", "carol@example.com", false));
//! assert!(outcome.is_inserted());
//! let (tree, _) = tree.insert(Contact::new("alice", "555-0100", "alice@example.com", true));
//!
//! // Records are always visited in key order
//! let names: Vec<&str> = tree.keys().collect();
//! assert_eq!(names, vec!["alice", "carol"]);
//!
//! let (tree, outcome) = tree.remove("bob");
//! assert_eq!(outcome, RemoveOutcome::NotFound);
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every operation:
//! 1. Every node caches `1 + max(height(left), height(right))`
//! 2. Every node has a balance factor in `{-1, 0, 1}`
//! 3. In-order traversal yields strictly ascending keys
//!
//! These invariants bound the height by roughly `1.44 * log2(N + 2)`.

mod audit;
mod iter;
mod node;
mod outcome;

pub use audit::InvariantViolation;
pub use iter::{IntoIter, Iter};
pub use outcome::{InsertOutcome, RemoveOutcome};

use std::fmt;

use crate::error::TreeError;
use node::{Link, height};

/// A record that carries its own ordering key.
///
/// Keys are compared with the ordinal (byte-wise) ordering of `str`.
pub trait Keyed {
    /// Returns the key identifying this record.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// An ordered map of records keyed by string, kept height-balanced.
///
/// Every subtree is exclusively owned by its parent, so no node is ever
/// shared. Cloning a tree deep-copies it.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `find`         | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `first`/`last` | O(log N)          |
/// | `list_all`     | O(N)              |
/// | `len`          | O(1)              |
/// | `height`       | O(1)              |
///
/// # Examples
///
/// ```rust
/// use avlbook::BalancedTree;
///
/// let tree: BalancedTree<String> = ["c", "b", "a"].into_iter().map(String::from).collect();
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.find("b"), Some(&"b".to_string()));
/// ```
#[derive(Clone)]
pub struct BalancedTree<R> {
    /// Root node of the tree
    root: Link<R>,
    /// Number of records
    length: usize,
}

impl<R> BalancedTree<R> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::BalancedTree;
    ///
    /// let tree: BalancedTree<String> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of records in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no records.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the height of the tree, `0` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::BalancedTree;
    ///
    /// let tree: BalancedTree<String> = (0..1000).map(|index| format!("{index:04}")).collect();
    /// assert!(tree.height() <= 14);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Returns a lazy iterator over the records in ascending key order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.root.as_deref(), self.length, self.height())
    }

    /// Returns every record in ascending key order.
    ///
    /// Same as [`iter`](Self::iter).
    #[must_use]
    pub fn list_all(&self) -> Iter<'_, R> {
        self.iter()
    }

    /// Returns, in ascending key order, the records that satisfy `predicate`.
    ///
    /// The predicate is applied as each node is visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::{BalancedTree, Contact};
    ///
    /// let tree: BalancedTree<Contact> = [
    ///     Contact::new("bob", "2", "bob@example.com", true),
    ///     Contact::new("alice", "1", "alice@example.com", false),
    ///     Contact::new("carol", "3", "carol@example.com", true),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let favorites: Vec<&str> = tree
    ///     .list_where(|contact| contact.favorite)
    ///     .map(|contact| contact.name.as_str())
    ///     .collect();
    /// assert_eq!(favorites, vec!["bob", "carol"]);
    /// ```
    pub fn list_where<P>(&self, mut predicate: P) -> impl Iterator<Item = &R>
    where
        P: FnMut(&R) -> bool,
    {
        self.iter().filter(move |record| predicate(record))
    }

    /// Returns the record with the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.root
            .as_deref()
            .map(|root| &node::leftmost(root).record)
    }

    /// Returns the record with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.root
            .as_deref()
            .map(|root| &node::rightmost(root).record)
    }
}

impl<R: Keyed> BalancedTree<R> {
    /// Creates a tree holding a single record.
    #[inline]
    #[must_use]
    pub fn singleton(record: R) -> Self {
        let (tree, _) = Self::new().insert(record);
        tree
    }

    /// Returns the record stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::{BalancedTree, Contact};
    ///
    /// let tree = BalancedTree::singleton(Contact::new("alice", "1", "a@example.com", false));
    /// assert_eq!(tree.find("alice").map(|contact| contact.phone.as_str()), Some("1"));
    /// assert!(tree.find("bob").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&R> {
        node::find(self.root.as_deref(), key)
    }

    /// Like [`find`](Self::find), but reports a missing key as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no record has `key`.
    pub fn require(&self, key: &str) -> Result<&R, TreeError> {
        self.find(key).ok_or_else(|| TreeError::KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Returns `true` if a record with `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(R::key)
    }

    /// Inserts a record, rebalancing every ancestor of the new leaf.
    ///
    /// If a record with the same key already exists, the tree is returned
    /// unchanged and the new record comes back inside
    /// [`InsertOutcome::DuplicateKeyIgnored`]. The stored record is never
    /// overwritten.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::{BalancedTree, Contact, InsertOutcome};
    ///
    /// let (tree, _) = BalancedTree::new().insert(Contact::new("x", "first", "", false));
    /// let (tree, outcome) = tree.insert(Contact::new("x", "second", "", false));
    ///
    /// assert!(matches!(outcome, InsertOutcome::DuplicateKeyIgnored(_)));
    /// assert_eq!(tree.find("x").map(|contact| contact.phone.as_str()), Some("first"));
    /// ```
    pub fn insert(self, record: R) -> (Self, InsertOutcome<R>) {
        let Self { root, length } = self;
        let (root, rejected) = node::insert(root, record);

        match rejected {
            None => {
                let tree = Self {
                    root: Some(root),
                    length: length + 1,
                };
                tracing::debug!(
                    target: "avlbook::tree",
                    length = tree.length,
                    height = tree.height(),
                    "record inserted"
                );
                (tree, InsertOutcome::Inserted)
            }
            Some(record) => {
                tracing::debug!(target: "avlbook::tree", key = record.key(), "duplicate key ignored");
                let tree = Self {
                    root: Some(root),
                    length,
                };
                (tree, InsertOutcome::DuplicateKeyIgnored(record))
            }
        }
    }

    /// Removes the record stored under `key` in a single descent, rebalancing
    /// every ancestor of the detached node.
    ///
    /// A node with two children takes over its in-order successor's record,
    /// and the successor's node is removed instead.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlbook::{BalancedTree, RemoveOutcome};
    ///
    /// let tree: BalancedTree<String> = ["b", "a", "c", "d"].into_iter().map(String::from).collect();
    /// let (tree, outcome) = tree.remove("b");
    ///
    /// assert_eq!(outcome, RemoveOutcome::Removed("b".to_string()));
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    /// ```
    pub fn remove(self, key: &str) -> (Self, RemoveOutcome<R>) {
        let Self { root, length } = self;
        let (root, removed) = node::remove(root, key);
        let length = if removed.is_some() { length - 1 } else { length };
        tracing::debug!(
            target: "avlbook::tree",
            key,
            removed = removed.is_some(),
            length,
            "remove"
        );
        (Self { root, length }, RemoveOutcome::from(removed))
    }

    /// Verifies every structural invariant of the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] encountered in in-order
    /// position, or a length mismatch once the walk completes.
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        let mut previous = None;
        let actual = audit::check(self.root.as_deref(), &mut previous)?;
        if actual == self.length {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch {
                cached: self.length,
                actual,
            })
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<R> Default for BalancedTree<R> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Keyed> FromIterator<R> for BalancedTree<R> {
    /// Builds a tree from records; when keys repeat, the first record wins.
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<R: Keyed> Extend<R> for BalancedTree<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            let (tree, _) = std::mem::take(self).insert(record);
            *self = tree;
        }
    }
}

impl<R> IntoIterator for BalancedTree<R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        let height = self.height();
        IntoIter::new(self.root, self.length, height)
    }
}

impl<'a, R> IntoIterator for &'a BalancedTree<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: PartialEq> PartialEq for BalancedTree<R> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<R: Eq> Eq for BalancedTree<R> {}

impl<R: fmt::Debug> fmt::Debug for BalancedTree<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<R: serde::Serialize> serde::Serialize for BalancedTree<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for BalancedTree<R>
where
    R: serde::Deserialize<'de> + Keyed,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let records = <Vec<R> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tree_of(keys: &[&str]) -> BalancedTree<String> {
        keys.iter().map(|key| (*key).to_string()).collect()
    }

    #[rstest]
    fn test_new_is_empty() {
        let tree: BalancedTree<String> = BalancedTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.audit(), Ok(()));
    }

    #[rstest]
    fn test_length_tracks_inserts_and_removes() {
        let tree = tree_of(&["m", "c", "x", "a"]);
        assert_eq!(tree.len(), 4);
        let (tree, _) = tree.remove("c");
        assert_eq!(tree.len(), 3);
        let (tree, _) = tree.remove("c");
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.audit(), Ok(()));
    }

    #[rstest]
    fn test_audit_detects_stale_height() {
        let mut tree = tree_of(&["b", "a", "c"]);
        if let Some(root) = tree.root.as_deref_mut() {
            root.height = 7;
        }
        assert!(matches!(
            tree.audit(),
            Err(InvariantViolation::StaleHeight { cached: 7, actual: 2, .. })
        ));
    }

    #[rstest]
    fn test_audit_detects_length_mismatch() {
        let mut tree = tree_of(&["a"]);
        tree.length = 2;
        assert_eq!(
            tree.audit(),
            Err(InvariantViolation::LengthMismatch {
                cached: 2,
                actual: 1
            })
        );
    }

    #[rstest]
    fn test_audit_detects_out_of_order_keys() {
        let mut tree = tree_of(&["b", "a", "c"]);
        if let Some(root) = tree.root.as_deref_mut() {
            root.record = "z".to_string();
        }
        assert!(matches!(
            tree.audit(),
            Err(InvariantViolation::OutOfOrder { .. })
        ));
    }

    #[rstest]
    fn test_audit_detects_imbalance() {
        let mut tree = tree_of(&["a"]);
        if let Some(root) = tree.root.as_deref_mut() {
            let mut middle = node::Node::leaf("c".to_string());
            middle.right = Some(Box::new(node::Node::leaf("d".to_string())));
            middle.update_height();
            root.right = Some(Box::new(middle));
            root.update_height();
        }
        tree.length = 3;
        assert!(matches!(
            tree.audit(),
            Err(InvariantViolation::Unbalanced { factor: -2, .. })
        ));
    }

    #[rstest]
    fn test_into_iter_yields_owned_records_in_order() {
        let tree = tree_of(&["delta", "alpha", "charlie", "bravo"]);
        let iterator = tree.into_iter();
        assert_eq!(iterator.len(), 4);
        let records: Vec<String> = iterator.collect();
        assert_eq!(records, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let tree = tree_of(&["b", "a", "c"]);
        let first: Vec<&String> = tree.iter().collect();
        let second: Vec<&String> = tree.iter().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_debug_lists_records_in_order() {
        let tree = tree_of(&["b", "a"]);
        assert_eq!(format!("{tree:?}"), r#"["a", "b"]"#);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let tree = tree_of(&["a", "b"]);
        let copy = tree.clone();
        let (tree, _) = tree.remove("a");
        assert_eq!(tree.len(), 1);
        assert_eq!(copy.len(), 2);
        assert!(copy.contains_key("a"));
    }
}
