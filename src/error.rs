//! Error types for tree operations.

use thiserror::Error;

/// Recoverable failures reported by [`BalancedTree`](crate::tree::BalancedTree)
/// operations.
///
/// Neither variant means the tree was modified: a failed insert or remove
/// leaves the tree exactly as it was.
///
/// # Examples
///
/// ```rust
/// use avlbook::TreeError;
///
/// let error = TreeError::KeyNotFound { key: "alice".to_string() };
/// assert_eq!(error.to_string(), "key not found: alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An insert was attempted with a key that is already present.
    #[error("duplicate key: {key}")]
    DuplicateKey {
        /// The key that was already present.
        key: String,
    },
    /// A remove or lookup targeted a key that is not present.
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
}
