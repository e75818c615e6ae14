use crate::book::Book;
use crate::error::{CatalogError, Result};
use crate::id::{IdGenerator, UuidGenerator};
use crate::report::{OverdueLoan, Report};
use crate::snapshot::Snapshot;
use crate::transaction::{Transaction, TransactionAction};
use crate::user::User;
use chrono::{Days, Utc};
use std::collections::BTreeMap;
use std::path::Path;

/// Loans run for two weeks from the day of issue.
pub const LOAN_PERIOD_DAYS: u64 = 14;

/// The catalog store: book inventory keyed by title, users keyed by
/// generated id, and the append-only transaction log.
///
/// Single-threaded by design; every operation runs to completion on the
/// caller's thread. The id generator is a type parameter so tests can swap
/// in a deterministic source.
pub struct Catalog<G: IdGenerator = UuidGenerator> {
    pub books: BTreeMap<String, Book>,
    pub users: BTreeMap<String, User>,
    pub transactions: Vec<Transaction>,
    id_generator: G,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl<G: IdGenerator> Catalog<G> {
    pub fn with_id_generator(id_generator: G) -> Self {
        Self {
            books: BTreeMap::new(),
            users: BTreeMap::new(),
            transactions: Vec::new(),
            id_generator,
        }
    }

    /// Stocks `quantity` copies of a title. An existing record keeps its
    /// author and genre even if different values are supplied; a new record
    /// starts with an issue count of zero.
    pub fn add_book(&mut self, title: &str, author: &str, genre: &str, quantity: u32) {
        match self.books.get_mut(title) {
            Some(book) => book.quantity += quantity,
            None => {
                self.books
                    .insert(title.to_string(), Book::new(title, author, genre, quantity));
            }
        }
        tracing::debug!(title, quantity, "book stocked");
    }

    /// Deletes a catalog record, stock and issue counter included. Loans
    /// referencing the title stay outstanding; returning one later recreates
    /// the record (see [`return_book`](Self::return_book)).
    pub fn remove_book(&mut self, title: &str) -> bool {
        self.books.remove(title).is_some()
    }

    /// Registers a borrower and returns the generated id.
    pub fn add_user(&mut self, name: &str, contact: &str) -> String {
        let id = self.id_generator.next_id();
        self.users
            .insert(id.clone(), User::new(id.clone(), name, contact));
        tracing::debug!(user_id = %id, "user registered");
        id
    }

    /// Deletes a user unconditionally. Outstanding loans are not reconciled:
    /// the borrowed copies stay off the shelf with no way to return them
    /// through normal means.
    pub fn remove_user(&mut self, user_id: &str) -> bool {
        match self.users.remove(user_id) {
            Some(user) => {
                if !user.borrowed.is_empty() {
                    tracing::warn!(
                        user_id,
                        loans = user.borrowed.len(),
                        "removed user still had outstanding loans"
                    );
                }
                true
            }
            None => false,
        }
    }

    /// Issues a copy to a user, due in [`LOAN_PERIOD_DAYS`] days.
    ///
    /// Preconditions are checked in order: the user must exist, the title
    /// must exist, and at least one copy must be on the shelf. A failed call
    /// leaves all state untouched.
    ///
    /// Re-issuing a title the user already holds overwrites the due date and
    /// decrements stock again, matching the historical behavior of the
    /// system; there is deliberately no already-borrowed guard.
    pub fn issue_book(&mut self, user_id: &str, title: &str) -> Result<String> {
        if !self.users.contains_key(user_id) {
            return Err(CatalogError::UserNotFound);
        }
        let book = self.books.get_mut(title).ok_or(CatalogError::BookNotFound)?;
        if book.quantity == 0 {
            return Err(CatalogError::NoCopiesAvailable);
        }

        let due = Utc::now().date_naive() + Days::new(LOAN_PERIOD_DAYS);
        book.quantity -= 1;
        book.issued_count += 1;
        if let Some(user) = self.users.get_mut(user_id) {
            user.borrowed.insert(title.to_string(), due);
        }
        self.transactions
            .push(Transaction::now(user_id, title, TransactionAction::Issue));
        tracing::info!(user_id, title, %due, "book issued");
        Ok(format!("Issued. Due: {due}"))
    }

    /// Takes a copy back from a user. The user must exist and must currently
    /// hold the title. If the record was removed from the catalog while the
    /// copy was out, it is recreated with one copy and placeholder metadata.
    pub fn return_book(&mut self, user_id: &str, title: &str) -> Result<String> {
        let user = self
            .users
            .get_mut(user_id)
            .ok_or(CatalogError::UserNotFound)?;
        if user.borrowed.remove(title).is_none() {
            return Err(CatalogError::NotBorrowed);
        }

        match self.books.get_mut(title) {
            Some(book) => book.quantity += 1,
            None => {
                self.books
                    .insert(title.to_string(), Book::new(title, "Unknown", "Unknown", 1));
            }
        }
        self.transactions
            .push(Transaction::now(user_id, title, TransactionAction::Return));
        tracing::info!(user_id, title, "book returned");
        Ok("Returned".to_string())
    }

    /// Summarizes the catalog: totals, the ten most-issued titles, and every
    /// loan whose due date is strictly before today. Read-only.
    pub fn report(&self) -> Report {
        let mut popular: Vec<Book> = self.books.values().cloned().collect();
        // Stable sort, so equal counts keep the map's title order.
        popular.sort_by(|a, b| b.issued_count.cmp(&a.issued_count));
        popular.truncate(10);

        let today = Utc::now().date_naive();
        let mut overdue = Vec::new();
        for user in self.users.values() {
            for (title, due) in &user.borrowed {
                if *due < today {
                    overdue.push(OverdueLoan {
                        user_id: user.id.clone(),
                        name: user.name.clone(),
                        book: title.clone(),
                        due: *due,
                    });
                }
            }
        }

        Report {
            total_books: self.books.values().map(|b| u64::from(b.quantity)).sum(),
            unique_titles: self.books.len(),
            total_users: self.users.len(),
            popular,
            overdue,
        }
    }

    /// Writes the full state to `path`, replacing any previous snapshot.
    pub fn save(&self, path: &Path) -> Result<()> {
        let snapshot = Snapshot {
            books: self.books.clone(),
            users: self.users.clone(),
            transactions: self.transactions.clone(),
        };
        snapshot.write(path)?;
        tracing::info!(path = %path.display(), "catalog saved");
        Ok(())
    }

    /// Replaces in-memory state with the snapshot at `path`. Returns
    /// `Ok(false)` when no snapshot exists yet; in that case, and on any
    /// failure, the current state is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<bool> {
        match Snapshot::read(path)? {
            Some(snapshot) => {
                self.books = snapshot.books;
                self.users = snapshot.users;
                self.transactions = snapshot.transactions;
                tracing::info!(
                    path = %path.display(),
                    books = self.books.len(),
                    users = self.users.len(),
                    "catalog loaded"
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
