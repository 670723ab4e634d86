//! Defines the endpoint for a session's running balance.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{Error, SessionId, app_state::TransactionState, stores::TransactionStore};

/// The signed sum of a session's transaction amounts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    /// The running balance, or `null` for a session with no transactions
    /// (SQLite's sum over an empty set).
    pub amount: Option<i64>,
}

/// The response body for the summary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The aggregate for the caller's session.
    pub summary: Summary,
}

/// A route handler for the signed sum of a session's transactions.
///
/// Guarded by [session_guard](crate::session_guard). Credits were stored
/// positive and debits negative, so the balance is a single `SUM(amount)`
/// scoped to the caller's session.
pub async fn get_summary_endpoint(
    State(state): State<TransactionState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Json<SummaryResponse>, Error> {
    let amount = state.transaction_store.sum_for_session(&session_id)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
