//! The core types for ledger transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::SessionId;

/// The unique identifier for a [Transaction].
///
/// Minted when the transaction is created and treated as an opaque string
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whether a transaction adds to or subtracts from a session's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    /// Money coming in: the stored amount keeps the supplied magnitude.
    Credit,
    /// Money going out: the stored amount is the negated magnitude.
    Debit,
}

impl TransactionType {
    /// Parse the wire name of a transaction type.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }
}

/// A transaction ready to be inserted into a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The identifier the stored transaction will have.
    pub id: TransactionId,
    /// Display text for the ledger entry.
    pub title: String,
    /// The signed amount: positive for credits, negative for debits.
    pub amount: i64,
    /// The session that owns the entry.
    pub session_id: SessionId,
}

impl NewTransaction {
    /// Build a transaction from validated request input.
    ///
    /// The sign of the stored amount is derived here: credits keep the
    /// supplied magnitude, debits store it negated. A fresh [TransactionId]
    /// is minted for every call, so repeated identical inputs produce
    /// distinct transactions.
    pub fn new(title: String, amount: i64, kind: TransactionType, session_id: SessionId) -> Self {
        let amount = match kind {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        };

        Self {
            id: TransactionId::mint(),
            title,
            amount,
            session_id,
        }
    }
}

/// A single ledger entry owned by an anonymous session.
///
/// Created once, at insertion; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique identifier, generated at creation.
    pub id: TransactionId,
    /// Display text for the ledger entry.
    pub title: String,
    /// The signed amount in the smallest currency unit.
    pub amount: i64,
    /// The session that owns the entry.
    pub session_id: SessionId,
    /// When the row was inserted, stamped by the store.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
