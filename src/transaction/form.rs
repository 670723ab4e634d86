//! Validation of the create-transaction request body.

use serde::Serialize;
use serde_json::Value;

use super::TransactionType;

/// A single request field that failed validation, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The name of the offending field.
    pub field: &'static str,
    /// What was wrong with the supplied value.
    pub message: &'static str,
}

/// Every field failure found in one request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(
    /// The individual field failures, in the order the fields are checked.
    pub Vec<FieldError>,
);

/// The validated input for creating a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransaction {
    /// Display text for the ledger entry.
    pub title: String,
    /// The unsigned magnitude in the smallest currency unit.
    pub amount: i64,
    /// Whether the entry is a credit or a debit.
    pub kind: TransactionType,
}

/// Check a request body against the create-transaction schema.
///
/// Checks all fields before returning so the client sees every problem at
/// once rather than one per attempt.
pub fn parse_create_transaction(body: &Value) -> Result<CreateTransaction, ValidationErrors> {
    let mut errors = Vec::new();

    let title = match body.get("title") {
        Some(Value::String(title)) if !title.trim().is_empty() => Some(title.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError {
                field: "title",
                message: "must not be empty",
            });
            None
        }
        Some(_) => {
            errors.push(FieldError {
                field: "title",
                message: "must be a string",
            });
            None
        }
        None => {
            errors.push(FieldError {
                field: "title",
                message: "is required",
            });
            None
        }
    };

    // TODO: decide whether negative magnitudes should be rejected here. A
    // negative debit currently stores as a positive amount.
    let amount = match body.get("amount") {
        Some(value) => match value.as_i64() {
            Some(amount) => Some(amount),
            None => {
                errors.push(FieldError {
                    field: "amount",
                    message: "must be an integer number",
                });
                None
            }
        },
        None => {
            errors.push(FieldError {
                field: "amount",
                message: "is required",
            });
            None
        }
    };

    let kind = match body.get("type") {
        Some(Value::String(kind)) => match TransactionType::parse(kind) {
            Some(kind) => Some(kind),
            None => {
                errors.push(FieldError {
                    field: "type",
                    message: "must be either \"credit\" or \"debit\"",
                });
                None
            }
        },
        Some(_) => {
            errors.push(FieldError {
                field: "type",
                message: "must be a string",
            });
            None
        }
        None => {
            errors.push(FieldError {
                field: "type",
                message: "is required",
            });
            None
        }
    };

    match (title, amount, kind) {
        (Some(title), Some(amount), Some(kind)) => Ok(CreateTransaction {
            title,
            amount,
            kind,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
