//! Defines the endpoint for fetching a single transaction by its ID.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error, SessionId, app_state::TransactionState, stores::TransactionStore,
    transaction::{Transaction, TransactionId},
};

/// The response body for the get-by-ID endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The matching transaction, or `null` if the session owns no row with
    /// the requested ID.
    pub transaction: Option<Transaction>,
}

/// A route handler for fetching one transaction by its ID.
///
/// Guarded by [session_guard](crate::session_guard). The lookup matches on
/// both the ID and the caller's session, so an ID that exists under another
/// session yields `null` exactly like an unknown ID; a missing row is part of
/// the contract, not an error, and responds 200.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
    Path(transaction_id): Path<String>,
) -> Result<Json<TransactionResponse>, Error> {
    let transaction = state
        .transaction_store
        .get(&TransactionId::from(transaction_id), &session_id)?;

    Ok(Json(TransactionResponse { transaction }))
}
