//! Storage access for ledger transactions: the store trait and its SQLite
//! implementation.

mod sqlite;
mod transaction;

pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
