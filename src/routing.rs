//! Application router configuration with guarded and unguarded route definitions.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    session::session_guard,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route that reads data sits behind the session guard; the create
/// route does not, since it is where session tokens are minted.
pub fn build_router(state: AppState) -> Router {
    let guarded_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .layer(middleware::from_fn(session_guard));

    Router::new()
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .merge(guarded_routes)
        .with_state(state)
}
