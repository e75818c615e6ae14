use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A registered borrower. `borrowed` maps a book title to its due date; an
/// entry exists exactly while that loan is outstanding.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub borrowed: BTreeMap<String, NaiveDate>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            borrowed: BTreeMap::new(),
        }
    }
}
