//! Text formatting of contacts.

use avlbook::Contact;

const FAVORITE_TAG: &str = " [Favorite]";

fn favorite_tag(contact: &Contact) -> &'static str {
    if contact.favorite { FAVORITE_TAG } else { "" }
}

/// `name, phone, email [Favorite]`, used for a single lookup result.
pub fn found_line(contact: &Contact) -> String {
    format!(
        "Found: {}, {}, {}{}",
        contact.name,
        contact.phone,
        contact.email,
        favorite_tag(contact)
    )
}

/// `name - phone - email [Favorite]`, used when listing everyone.
pub fn listing_line(contact: &Contact) -> String {
    format!(
        "{} - {} - {}{}",
        contact.name,
        contact.phone,
        contact.email,
        favorite_tag(contact)
    )
}

/// `name - phone`, used when listing favorites.
pub fn favorite_line(contact: &Contact) -> String {
    format!("{} - {}", contact.name, contact.phone)
}
