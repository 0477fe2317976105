//! The contact record stored in the address book.

use crate::tree::Keyed;

/// A single address-book entry, keyed by its name.
///
/// The tree only ever looks at [`name`](Self::name); the other fields are
/// carried along untouched.
///
/// # Examples
///
/// ```rust
/// use avlbook::{Contact, Keyed};
///
/// let contact = Contact::new("alice", "555-0100", "alice@example.com", true);
/// assert_eq!(contact.key(), "alice");
/// assert!(contact.favorite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    /// Unique name, used as the ordering key.
    pub name: String,
    /// Phone number, free-form.
    pub phone: String,
    /// Email address, free-form.
    pub email: String,
    /// Whether the contact is marked as a favorite.
    pub favorite: bool,
}

impl Contact {
    /// Creates a contact.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        favorite: bool,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            favorite,
        }
    }
}

impl Keyed for Contact {
    fn key(&self) -> &str {
        &self.name
    }
}
