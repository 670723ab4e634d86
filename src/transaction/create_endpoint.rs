//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::Value;

use crate::{
    Error,
    app_state::TransactionState,
    session::{
        SessionId,
        cookie::{get_session_id_from_cookies, set_session_cookie},
    },
    stores::TransactionStore,
    transaction::{NewTransaction, form::parse_create_transaction},
};

/// A route handler for creating a new transaction.
///
/// The body must carry a non-empty `title`, an integer `amount` magnitude and
/// a `type` of either `credit` or `debit`; the stored amount is signed by the
/// type. This route is deliberately not behind the session guard: a caller
/// without a session cookie gets a fresh token minted here, attached to the
/// 201 response as a cookie. A caller that already holds a token keeps it.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> Response {
    let input = match parse_create_transaction(&body) {
        Ok(input) => input,
        Err(errors) => return Error::Validation(errors).into_response(),
    };

    let (session_id, updated_jar) = match get_session_id_from_cookies(&jar) {
        Some(session_id) => (session_id, None),
        None => {
            let session_id = SessionId::mint();
            let jar = set_session_cookie(jar, &session_id);

            (session_id, Some(jar))
        }
    };

    let transaction = NewTransaction::new(input.title, input.amount, input.kind, session_id);

    let mut store = state.transaction_store;
    if let Err(error) = store.create(transaction) {
        return error.into_response();
    }

    match updated_jar {
        Some(jar) => (StatusCode::CREATED, jar).into_response(),
        None => StatusCode::CREATED.into_response(),
    }
}
