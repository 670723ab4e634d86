//! Defines the endpoint for listing a session's transactions.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    Error, SessionId, app_state::TransactionState, stores::TransactionStore,
    transaction::Transaction,
};

/// The response body for the list endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction owned by the caller's session, in storage order.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all of a session's transactions.
///
/// Guarded by [session_guard](crate::session_guard); only rows whose session
/// matches the caller's token are returned.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<TransactionsResponse>, Error> {
    let transactions = state.transaction_store.get_for_session(&session_id)?;

    Ok(Json(TransactionsResponse { transactions }))
}
