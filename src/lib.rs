//! Centavo is a small ledger API for recording credit and debit transactions
//! against an anonymous session.
//!
//! Clients do not register accounts: the first transaction they create mints
//! an opaque session token, delivered as a cookie, and every later read and
//! write is scoped to the transactions owned by that token. Amounts are kept
//! in the smallest currency unit, stored positive for credits and negative
//! for debits so a session's balance is a plain sum.
//!
//! This library provides a REST API that serves JSON.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod routing;
mod session;
mod stores;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;
pub use session::{SessionId, session_guard};
pub use stores::{SqliteTransactionStore, TransactionStore};
pub use transaction::{
    FieldError, NewTransaction, Transaction, TransactionId, TransactionType, ValidationErrors,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body did not match the expected shape.
    ///
    /// Carries one entry per offending field so the client can report every
    /// problem at once.
    #[error("request validation failed")]
    Validation(ValidationErrors),

    /// An unhandled/unexpected SQL error.
    ///
    /// The inner error should only be logged for debugging on the server;
    /// clients receive a generic message.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "request validation failed",
                    "fields": fields,
                })),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
