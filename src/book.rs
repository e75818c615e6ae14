use serde::{Deserialize, Serialize};

/// A catalog record: a title's metadata plus live stock and the cumulative
/// number of times it has been issued.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Copies currently on the shelf.
    pub quantity: u32,
    /// Lifetime issue counter, used for the popularity report. Never reset,
    /// not even when the record is deleted and recreated.
    #[serde(default)]
    pub issued_count: u64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            quantity,
            issued_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_starts_with_zero_issues() {
        let book = Book::new("Dune", "Frank Herbert", "Science Fiction", 3);
        assert_eq!(book.quantity, 3);
        assert_eq!(book.issued_count, 0);
    }

    #[test]
    fn test_deserialization_defaults_missing_issued_count() {
        let json = r#"{
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "quantity": 2
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.issued_count, 0);
        assert_eq!(book.quantity, 2);
    }

    #[test]
    fn test_negative_quantity_rejected_by_type() {
        let json = r#"{
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Science Fiction",
            "quantity": -1
        }"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }
}
