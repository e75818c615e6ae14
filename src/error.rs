use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("User not found")]
    UserNotFound,
    #[error("Book not found")]
    BookNotFound,
    #[error("No copies available")]
    NoCopiesAvailable,
    #[error("User did not borrow this book")]
    NotBorrowed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt data file: {0}")]
    CorruptData(#[from] serde_json::Error),
}

impl CatalogError {
    /// Business-rule rejections are reported to the caller as a message and
    /// the session continues; `Io` and `CorruptData` are faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CatalogError::UserNotFound
                | CatalogError::BookNotFound
                | CatalogError::NoCopiesAvailable
                | CatalogError::NotBorrowed
        )
    }
}
