//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};
use time::OffsetDateTime;

use crate::{
    Error, SessionId,
    db::{CreateTable, MapRow},
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// The creation timestamp is stamped here, not by the caller.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(
                "INSERT INTO transactions (id, title, amount, session_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, title, amount, session_id, created_at",
            )?
            .query_row(
                (
                    new_transaction.id.as_str(),
                    &new_transaction.title,
                    new_transaction.amount,
                    new_transaction.session_id.as_str(),
                    OffsetDateTime::now_utc(),
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// A row owned by another session is indistinguishable from a row that
    /// does not exist.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get(
        &self,
        id: &TransactionId,
        session_id: &SessionId,
    ) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE id = :id AND session_id = :session_id",
            )?
            .query_row(
                &[(":id", &id.as_str()), (":session_id", &session_id.as_str())],
                Self::map_row,
            )
            .optional()?;

        Ok(transaction)
    }

    /// Retrieve all transactions owned by `session_id`, in storage order.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get_for_session(&self, session_id: &SessionId) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE session_id = :session_id",
            )?
            .query_map(&[(":session_id", &session_id.as_str())], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// The signed sum of all amounts owned by `session_id`.
    ///
    /// SQLite's SUM over an empty set is NULL, which surfaces as `None`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn sum_for_session(&self, session_id: &SessionId) -> Result<Option<i64>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT SUM(amount) FROM transactions WHERE session_id = :session_id")?
            .query_row(&[(":session_id", &session_id.as_str())], |row| row.get(0))
            .map_err(|error| error.into())
    }
}

impl CreateTable for SqliteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS transactions (
                    id TEXT PRIMARY KEY,
                    title TEXT NOT NULL,
                    amount INTEGER NOT NULL,
                    session_id TEXT NOT NULL,
                    created_at TEXT NOT NULL
                    )",
            (),
        )?;

        // Every read is scoped by session, so keep those lookups off a full scan.
        connection.execute(
            "CREATE INDEX IF NOT EXISTS transactions_session_id ON transactions (session_id)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SqliteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: TransactionId::from(row.get::<_, String>(offset)?),
            title: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            session_id: SessionId::from(row.get::<_, String>(offset + 3)?),
            created_at: row.get(offset + 4)?,
        })
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        SessionId,
        db::initialize,
        stores::TransactionStore,
        transaction::{NewTransaction, TransactionId, TransactionType},
    };

    use super::SqliteTransactionStore;

    fn get_test_store() -> SqliteTransactionStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        SqliteTransactionStore::new(Arc::new(Mutex::new(conn)))
    }

    fn new_session() -> SessionId {
        SessionId::from(uuid::Uuid::new_v4().to_string())
    }

    #[test]
    fn create_transaction_succeeds() {
        let mut store = get_test_store();
        let session_id = new_session();

        let new_transaction = NewTransaction::new(
            "New".to_string(),
            5000,
            TransactionType::Credit,
            session_id.clone(),
        );
        let want_id = new_transaction.id.clone();

        let transaction = store.create(new_transaction).unwrap();

        assert_eq!(transaction.id, want_id);
        assert_eq!(transaction.title, "New");
        assert_eq!(transaction.amount, 5000);
        assert_eq!(transaction.session_id, session_id);
    }

    #[test]
    fn create_transaction_stores_negated_debit_amount() {
        let mut store = get_test_store();

        let transaction = store
            .create(NewTransaction::new(
                "Groceries".to_string(),
                3000,
                TransactionType::Debit,
                new_session(),
            ))
            .unwrap();

        assert_eq!(transaction.amount, -3000);
    }

    #[test]
    fn get_transaction_succeeds() {
        let mut store = get_test_store();
        let session_id = new_session();

        let inserted = store
            .create(NewTransaction::new(
                "New".to_string(),
                5000,
                TransactionType::Credit,
                session_id.clone(),
            ))
            .unwrap();

        let selected = store.get(&inserted.id, &session_id).unwrap();

        assert_eq!(selected, Some(inserted));
    }

    #[test]
    fn get_transaction_returns_none_for_unknown_id() {
        let store = get_test_store();

        let selected = store
            .get(
                &TransactionId::from("does-not-exist".to_string()),
                &new_session(),
            )
            .unwrap();

        assert_eq!(selected, None);
    }

    #[test]
    fn get_transaction_returns_none_for_another_sessions_row() {
        let mut store = get_test_store();

        let inserted = store
            .create(NewTransaction::new(
                "New".to_string(),
                5000,
                TransactionType::Credit,
                new_session(),
            ))
            .unwrap();

        let selected = store.get(&inserted.id, &new_session()).unwrap();

        assert_eq!(selected, None);
    }

    #[test]
    fn get_for_session_returns_only_the_sessions_rows() {
        let mut store = get_test_store();
        let session_id = new_session();

        let mine = store
            .create(NewTransaction::new(
                "Mine".to_string(),
                5000,
                TransactionType::Credit,
                session_id.clone(),
            ))
            .unwrap();
        store
            .create(NewTransaction::new(
                "Someone else's".to_string(),
                9000,
                TransactionType::Credit,
                new_session(),
            ))
            .unwrap();

        let transactions = store.get_for_session(&session_id).unwrap();

        assert_eq!(transactions, vec![mine]);
    }

    #[test]
    fn get_for_session_returns_empty_for_unknown_session() {
        let store = get_test_store();

        let transactions = store.get_for_session(&new_session()).unwrap();

        assert_eq!(transactions, vec![]);
    }

    #[test]
    fn sum_for_session_is_the_signed_total() {
        let mut store = get_test_store();
        let session_id = new_session();

        store
            .create(NewTransaction::new(
                "Credit transaction".to_string(),
                5000,
                TransactionType::Credit,
                session_id.clone(),
            ))
            .unwrap();
        store
            .create(NewTransaction::new(
                "Debit transaction".to_string(),
                3000,
                TransactionType::Debit,
                session_id.clone(),
            ))
            .unwrap();

        let sum = store.sum_for_session(&session_id).unwrap();

        assert_eq!(sum, Some(2000));
    }

    #[test]
    fn sum_for_session_scopes_to_the_session() {
        let mut store = get_test_store();
        let session_id = new_session();

        store
            .create(NewTransaction::new(
                "Mine".to_string(),
                5000,
                TransactionType::Credit,
                session_id.clone(),
            ))
            .unwrap();
        store
            .create(NewTransaction::new(
                "Someone else's".to_string(),
                9000,
                TransactionType::Credit,
                new_session(),
            ))
            .unwrap();

        assert_eq!(store.sum_for_session(&session_id).unwrap(), Some(5000));
    }

    #[test]
    fn sum_for_empty_session_is_none() {
        let store = get_test_store();

        let sum = store.sum_for_session(&new_session()).unwrap();

        assert_eq!(sum, None);
    }
}
