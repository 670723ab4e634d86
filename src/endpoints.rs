//! The API endpoints URIs.

/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for the signed sum of a session's transactions.
pub const TRANSACTIONS_SUMMARY: &str = "/transactions/summary";
