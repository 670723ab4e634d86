//! The transaction service: domain models, request validation, and the four
//! route handlers.

mod create_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod models;
mod summary_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use form::{CreateTransaction, FieldError, ValidationErrors, parse_create_transaction};
pub use get_endpoint::{TransactionResponse, get_transaction_endpoint};
pub use list_endpoint::{TransactionsResponse, list_transactions_endpoint};
pub use models::{NewTransaction, Transaction, TransactionId, TransactionType};
pub use summary_endpoint::{Summary, SummaryResponse, get_summary_endpoint};
