//! # Contacts Sample Application
//!
//! An interactive address book driven by a numbered menu, storing contacts in
//! an [`avlbook::BalancedTree`].
//!
//! ## Module Structure
//!
//! - `menu`: Menu choices and their parsing
//! - `render`: Text formatting of contacts
//! - `session`: The read-eval-print loop over any `BufRead`/`Write` pair
//! - `error`: Errors surfaced by the loop

#![forbid(unsafe_code)]

pub mod error;
pub mod menu;
pub mod render;
pub mod session;

pub use error::ContactsError;
pub use menu::MenuChoice;
pub use session::Session;
