//! Callsheet Storage Layer
//!
//! Implements the ActorStore trait on top of SQLite.
//!
//! # Architecture
//!
//! - One `actors` table keyed by a UUIDv7 blob
//! - Email uniqueness enforced by a UNIQUE constraint, not by application code
//! - Append-only: no update or delete statements exist
//!
//! # Examples
//!
//! ```no_run
//! use callsheet_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for actor operations
//! ```

#![warn(missing_docs)]

use callsheet_domain::traits::ActorStore;
use callsheet_domain::{ActorId, ActorRecord, ActorSummary, NewActor};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Email already belongs to a stored record
    #[error("Email already taken: {0}")]
    DuplicateEmail(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const RECORD_COLUMNS: &str = "id, email, description, first_name, last_name, address, \
                              height, weight, gender, age, created_at";

/// SQLite-based implementation of ActorStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Share a store between threads by
/// wrapping it in a mutex.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use callsheet_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("callsheet.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert ActorId to bytes for storage
    fn actor_id_to_bytes(id: ActorId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to ActorId
    fn bytes_to_actor_id(bytes: &[u8]) -> Result<ActorId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!(
                "Expected 16 bytes for ActorId, got {}",
                bytes.len()
            ))
        })?;
        Ok(ActorId::from_value(u128::from_be_bytes(arr)))
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<ActorRecord> {
        let id_bytes: Vec<u8> = row.get(0)?;
        let id = Self::bytes_to_actor_id(&id_bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Blob, Box::new(e))
        })?;

        Ok(ActorRecord {
            id,
            email: row.get(1)?,
            description: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            address: row.get(5)?,
            height: row.get(6)?,
            weight: row.get(7)?,
            gender: row.get(8)?,
            age: row.get(9)?,
            created_at: row.get::<_, i64>(10)? as u64,
        })
    }

    /// Map a UNIQUE violation on the email column to `DuplicateEmail`
    fn map_insert_error(err: rusqlite::Error, email: &str) -> StoreError {
        match &err {
            rusqlite::Error::SqliteFailure(failure, Some(message))
                if failure.code == rusqlite::ErrorCode::ConstraintViolation
                    && message.contains("actors.email") =>
            {
                StoreError::DuplicateEmail(email.to_string())
            }
            _ => StoreError::Database(err),
        }
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl ActorStore for SqliteStore {
    type Error = StoreError;

    fn create(&mut self, actor: NewActor) -> Result<ActorRecord, Self::Error> {
        let record = ActorRecord::from_new(ActorId::new(), actor, Self::now_millis());
        let id_bytes = Self::actor_id_to_bytes(record.id);

        self.conn
            .execute(
                "INSERT INTO actors (id, email, description, first_name, last_name, address,
                                     height, weight, gender, age, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    &id_bytes,
                    &record.email,
                    &record.description,
                    &record.first_name,
                    &record.last_name,
                    &record.address,
                    &record.height,
                    &record.weight,
                    &record.gender,
                    record.age,
                    record.created_at as i64,
                ],
            )
            .map_err(|e| Self::map_insert_error(e, &record.email))?;

        debug!("Inserted actor {}", record.id);
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<ActorSummary>, Self::Error> {
        // rowid breaks ties between records created in the same millisecond
        let mut stmt = self.conn.prepare(
            "SELECT first_name, address, gender, height
             FROM actors ORDER BY created_at DESC, rowid DESC",
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ActorSummary {
                    first_name: row.get(0)?,
                    address: row.get(1)?,
                    gender: row.get(2)?,
                    height: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    fn find_by_id(&self, id: ActorId) -> Result<Option<ActorRecord>, Self::Error> {
        let id_bytes = Self::actor_id_to_bytes(id);

        let record = self
            .conn
            .query_row(
                &format!("SELECT {} FROM actors WHERE id = ?1", RECORD_COLUMNS),
                params![&id_bytes],
                Self::row_to_record,
            )
            .optional()?;

        Ok(record)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<ActorRecord>, Self::Error> {
        let record = self
            .conn
            .query_row(
                &format!("SELECT {} FROM actors WHERE email = ?1", RECORD_COLUMNS),
                params![email],
                Self::row_to_record,
            )
            .optional()?;

        Ok(record)
    }

    fn is_duplicate_email(error: &Self::Error) -> bool {
        matches!(error, StoreError::DuplicateEmail(_))
    }
}
