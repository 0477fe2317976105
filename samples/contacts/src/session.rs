//! The interactive command loop.
//!
//! A [`Session`] owns the address book and reads menu selections until the
//! user quits or input runs out. It is generic over its input and output so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use avlbook::{BalancedTree, Contact, InsertOutcome, RemoveOutcome};

use crate::error::ContactsError;
use crate::menu::{MenuChoice, parse_yes};
use crate::render;

/// An address book bound to an input and an output stream.
pub struct Session<I, O> {
    book: BalancedTree<Contact>,
    input: I,
    output: O,
    quiet: bool,
}

impl<I: BufRead, O: Write> Session<I, O> {
    /// Creates a session with an empty address book.
    pub const fn new(input: I, output: O) -> Self {
        Self {
            book: BalancedTree::new(),
            input,
            output,
            quiet: false,
        }
    }

    /// Suppresses the menu and prompts, leaving only results on the output.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns the current address book.
    pub const fn book(&self) -> &BalancedTree<Contact> {
        &self.book
    }

    /// Consumes the session, returning the address book and the output.
    pub fn into_parts(self) -> (BalancedTree<Contact>, O) {
        (self.book, self.output)
    }

    /// Runs the menu loop until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Io`] if reading or writing fails.
    pub fn run(&mut self) -> Result<(), ContactsError> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(error) => {
                    tracing::warn!(%error, "ignoring menu input");
                    writeln!(self.output, "Invalid option.")?;
                    continue;
                }
            };

            let outcome = match choice {
                MenuChoice::Add => self.add(),
                MenuChoice::Find => self.find(),
                MenuChoice::ListAll => self.list_all(),
                MenuChoice::ListFavorites => self.list_favorites(),
                MenuChoice::Remove => self.remove(),
                MenuChoice::Quit => break,
            };

            match outcome {
                Ok(()) => {}
                Err(ContactsError::EndOfInput) => break,
                Err(error) => return Err(error),
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), ContactsError> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ContactsError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_length = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_length);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<String, ContactsError> {
        if !self.quiet {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;
        }
        self.read_line()?.ok_or(ContactsError::EndOfInput)
    }

    fn add(&mut self) -> Result<(), ContactsError> {
        let name = self.prompt("Name")?;
        let phone = self.prompt("Phone")?;
        let email = self.prompt("Email")?;
        let favorite = parse_yes(&self.prompt("Favorite? (y/n)")?);

        let (book, outcome) = std::mem::take(&mut self.book)
            .insert(Contact::new(name, phone, email, favorite));
        self.book = book;

        match outcome {
            InsertOutcome::Inserted => {
                tracing::info!(size = self.book.len(), "contact added");
                writeln!(self.output, "Contact added.")?;
            }
            InsertOutcome::DuplicateKeyIgnored(rejected) => {
                tracing::info!(name = %rejected.name, "duplicate contact rejected");
                writeln!(
                    self.output,
                    "A contact named {} already exists.",
                    rejected.name
                )?;
            }
        }
        Ok(())
    }

    fn find(&mut self) -> Result<(), ContactsError> {
        let name = self.prompt("Find by name")?;
        match self.book.find(&name) {
            Some(contact) => writeln!(self.output, "{}", render::found_line(contact))?,
            None => writeln!(self.output, "Contact not found.")?,
        }
        Ok(())
    }

    fn list_all(&mut self) -> Result<(), ContactsError> {
        writeln!(self.output, "Contacts in alphabetical order:")?;
        for contact in self.book.list_all() {
            writeln!(self.output, "{}", render::listing_line(contact))?;
        }
        Ok(())
    }

    fn list_favorites(&mut self) -> Result<(), ContactsError> {
        writeln!(self.output, "Favorites:")?;
        for contact in self.book.list_where(|contact| contact.favorite) {
            writeln!(self.output, "{}", render::favorite_line(contact))?;
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<(), ContactsError> {
        let name = self.prompt("Name of the contact to remove")?;
        let (book, outcome) = std::mem::take(&mut self.book).remove(&name);
        self.book = book;

        match outcome {
            RemoveOutcome::Removed(contact) => {
                tracing::info!(name = %contact.name, size = self.book.len(), "contact removed");
                writeln!(self.output, "Contact removed.")?;
            }
            RemoveOutcome::NotFound => writeln!(self.output, "Contact not found.")?,
        }
        Ok(())
    }
}
