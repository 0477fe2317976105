//! # avlbook
//!
//! An address book backed by a height-balanced (AVL) binary search tree.
//!
//! ## Overview
//!
//! - **[`BalancedTree`]**: ordered map of records keyed by string, with
//!   O(log N) insert, remove and find, and lazy in-order traversal
//! - **[`Contact`]**: the record type stored in the address book
//! - **[`TreeError`]**: recoverable errors for duplicate or missing keys
//!
//! The interactive command loop lives in the `contacts` sample crate.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Contact`] and [`BalancedTree`]
//!
//! ## Example
//!
//! ```rust
//! use avlbook::{BalancedTree, Contact};
//!
//! let book: BalancedTree<Contact> = [
//!     Contact::new("carol", "555-0102", "carol@example.com", true),
//!     Contact::new("alice", "555-0100", "alice@example.com", false),
//! ]
//! .into_iter()
//! .collect();
//!
//! let names: Vec<&str> = book.keys().collect();
//! assert_eq!(names, vec!["alice", "carol"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use avlbook::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contact::Contact;
    pub use crate::error::TreeError;
    pub use crate::tree::*;
}

pub mod contact;
pub mod error;
pub mod tree;

pub use contact::Contact;
pub use error::TreeError;
pub use tree::{BalancedTree, InsertOutcome, InvariantViolation, Keyed, RemoveOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(BalancedTree<Contact>: Send, Sync, Default, Clone);
    assert_impl_all!(Contact: Send, Sync, Keyed);
}
