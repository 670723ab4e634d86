//! Defines the transaction store trait.

use crate::{
    Error, SessionId,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Handles the creation and retrieval of transactions.
///
/// Implementers are the sole owners of persisted rows; every read is scoped
/// to a single session token.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// Returns `None` when no such row exists, including when `id` exists
    /// under a different session.
    fn get(
        &self,
        id: &TransactionId,
        session_id: &SessionId,
    ) -> Result<Option<Transaction>, Error>;

    /// Retrieve all transactions owned by `session_id`, in storage order.
    fn get_for_session(&self, session_id: &SessionId) -> Result<Vec<Transaction>, Error>;

    /// The signed sum of all amounts owned by `session_id`.
    ///
    /// Returns `None` for a session with no transactions.
    fn sum_for_session(&self, session_id: &SessionId) -> Result<Option<i64>, Error>;
}
