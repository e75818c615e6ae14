use crate::book::Book;
use chrono::NaiveDate;
use serde::Serialize;

/// An outstanding loan whose due date has passed.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct OverdueLoan {
    pub user_id: String,
    pub name: String,
    pub book: String,
    pub due: NaiveDate,
}

/// Point-in-time summary of the catalog. Produced by [`Catalog::report`];
/// computing it never mutates the store.
///
/// [`Catalog::report`]: crate::catalog::Catalog::report
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Report {
    /// Sum of shelf quantities over all catalog records.
    pub total_books: u64,
    pub unique_titles: usize,
    pub total_users: usize,
    /// Up to ten records, most-issued first.
    pub popular: Vec<Book>,
    pub overdue: Vec<OverdueLoan>,
}
