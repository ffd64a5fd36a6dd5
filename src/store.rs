use libsql::{Builder, Connection};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::constants::*;
use crate::error::StoreError;
use crate::models::{Expense, SessionToken, User};
use crate::users::CredentialScheme;

const CREATE_KV_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key    TEXT PRIMARY KEY,
    value  TEXT NOT NULL
);
"#;

const UPSERT_VALUE: &str = r#"
INSERT INTO kv (key, value) VALUES (?, ?)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

/// Persistence facade over the local store (expenseflow.db).
///
/// Owns the in-memory user and expense collections and is the only component
/// that touches durable storage. Every mutation serializes the whole affected
/// collection and writes it under a single kv key; the in-memory collection is
/// swapped in only after the durable write succeeds, so a failed flush leaves
/// both memory and disk in the prior state.
pub struct ExpenseStore {
    conn: Connection,
    scheme: Box<dyn CredentialScheme>,
    pub(crate) users: Vec<User>,
    pub(crate) expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Opens (creating if needed) the local store under `data_dir` and loads
    /// the collections into memory. Missing keys mean empty collections;
    /// malformed stored data is logged and treated as empty rather than
    /// aborting startup. Safe to call once at application start.
    pub async fn open(
        data_dir: &str,
        scheme: Box<dyn CredentialScheme>,
    ) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = Path::new(data_dir).join(STORE_FILE_NAME);
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        conn.execute(CREATE_KV_TABLE, ()).await?;

        let users = load_collection(&conn, KEY_USERS).await?;
        let expenses = load_collection(&conn, KEY_EXPENSES).await?;

        Ok(ExpenseStore {
            conn,
            scheme,
            users,
            expenses,
        })
    }

    pub(crate) fn scheme(&self) -> &dyn CredentialScheme {
        self.scheme.as_ref()
    }

    pub(crate) async fn flush_users(&self, users: &[User]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(users)?;
        write_value(&self.conn, KEY_USERS, &raw).await
    }

    pub(crate) async fn flush_expenses(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(expenses)?;
        write_value(&self.conn, KEY_EXPENSES, &raw).await
    }

    /// Persists the identity token for the session manager. Tokens live in
    /// the same local store as the collections, under their own key.
    pub async fn save_session(&self, token: &SessionToken) -> Result<(), StoreError> {
        let raw = serde_json::to_string(token)?;
        write_value(&self.conn, KEY_SESSION, &raw).await
    }

    /// Reads the persisted session token, if any. A malformed token is
    /// cleared and reported as absent.
    pub async fn load_session(&self) -> Result<Option<SessionToken>, StoreError> {
        let Some(raw) = read_value(&self.conn, KEY_SESSION).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                log::warn!("malformed session token in local store, clearing: {}", e);
                self.clear_session().await?;
                Ok(None)
            }
        }
    }

    pub async fn clear_session(&self) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?", [KEY_SESSION])
            .await?;
        Ok(())
    }
}

async fn read_value(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
    let mut rows = conn
        .query("SELECT value FROM kv WHERE key = ?", [key])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

async fn write_value(conn: &Connection, key: &str, value: &str) -> Result<(), StoreError> {
    conn.execute(UPSERT_VALUE, (key, value)).await?;
    Ok(())
}

async fn load_collection<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> Result<Vec<T>, StoreError> {
    match read_value(conn, key).await? {
        None => Ok(Vec::new()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                log::warn!(
                    "malformed '{}' collection in local store, starting empty: {}",
                    key,
                    e
                );
                Ok(Vec::new())
            }
        },
    }
}
