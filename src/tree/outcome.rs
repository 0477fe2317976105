//! Results of mutating tree operations.

use super::Keyed;
use crate::error::TreeError;

/// What happened to a record passed to [`BalancedTree::insert`](super::BalancedTree::insert).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum InsertOutcome<R> {
    /// A new node was created for the record.
    Inserted,
    /// A record with the same key already exists. The tree is unchanged and
    /// the rejected record is handed back.
    DuplicateKeyIgnored(R),
}

impl<R> InsertOutcome<R> {
    /// Returns `true` if the record was stored.
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }
}

impl<R: Keyed> InsertOutcome<R> {
    /// Converts the outcome into a `Result`, turning a duplicate into
    /// [`TreeError::DuplicateKey`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateKey`] if the key was already present.
    pub fn into_result(self) -> Result<(), TreeError> {
        match self {
            Self::Inserted => Ok(()),
            Self::DuplicateKeyIgnored(record) => Err(TreeError::DuplicateKey {
                key: record.key().to_owned(),
            }),
        }
    }
}

/// What happened to the key passed to [`BalancedTree::remove`](super::BalancedTree::remove).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome<R> {
    /// The record stored under the key, now detached from the tree.
    Removed(R),
    /// No record had the key. The tree is unchanged.
    NotFound,
}

impl<R> RemoveOutcome<R> {
    /// Returns `true` if a record was removed.
    pub const fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// Returns the removed record, if any.
    pub fn removed(self) -> Option<R> {
        match self {
            Self::Removed(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] carrying `key` if nothing was removed.
    pub fn into_result(self, key: &str) -> Result<R, TreeError> {
        match self {
            Self::Removed(record) => Ok(record),
            Self::NotFound => Err(TreeError::KeyNotFound {
                key: key.to_owned(),
            }),
        }
    }
}

impl<R> From<Option<R>> for RemoveOutcome<R> {
    fn from(removed: Option<R>) -> Self {
        removed.map_or(Self::NotFound, Self::Removed)
    }
}
