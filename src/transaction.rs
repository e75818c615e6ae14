use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    Issue,
    Return,
}

/// One entry in the append-only loan history. Entries are never mutated or
/// deleted, and survive removal of the book or user they reference.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub user_id: String,
    pub book_title: String,
    pub action: TransactionAction,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Records an action stamped with the current time.
    pub fn now(
        user_id: impl Into<String>,
        book_title: impl Into<String>,
        action: TransactionAction,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            book_title: book_title.into(),
            action,
            date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionAction::Issue).unwrap(),
            r#""issue""#
        );
        assert_eq!(
            serde_json::to_string(&TransactionAction::Return).unwrap(),
            r#""return""#
        );
    }

    #[test]
    fn test_transaction_round_trip() {
        let tx = Transaction::now("u-1", "Dune", TransactionAction::Issue);
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
