use crate::book::Book;
use crate::error::Result;
use crate::transaction::Transaction;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// On-disk shape of the persisted catalog: one JSON document with three
/// top-level fields. Written pretty-printed so the file stays
/// human-inspectable.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub books: BTreeMap<String, Book>,
    #[serde(default)]
    pub users: BTreeMap<String, User>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Overwrites `path` with the full snapshot.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads the snapshot at `path`. A missing file is not an error and
    /// yields `Ok(None)`; present but malformed content is a
    /// [`CorruptData`](crate::error::CatalogError::CorruptData) fault.
    pub fn read(path: &Path) -> Result<Option<Snapshot>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
