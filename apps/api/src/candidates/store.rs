//! Candidate Store: durable, name-unique persistence of résumé text.
//!
//! Records are append-only: there is no update and no delete. `AUTOINCREMENT`
//! keeps ids monotonic and never reused, and the UNIQUE constraint on `name`
//! is the single point that serialises concurrent writers.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::candidate::{CandidateId, CandidateRow, CandidateSummary};

const CREATE_CANDIDATES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS candidates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    resume_text TEXT NOT NULL
)
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Candidate name must not be empty")]
    EmptyName,

    #[error("A candidate named '{0}' already exists")]
    DuplicateName(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::StorageUnavailable(e)
    }
}

/// Handle to the `candidates` table. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct CandidateStore {
    pool: SqlitePool,
}

impl CandidateStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `candidates` table if absent. Safe to call on every start.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_CANDIDATES_TABLE)
            .execute(&self.pool)
            .await?;
        info!("Candidate store ready");
        Ok(())
    }

    /// Inserts a new candidate. Never overwrites: a taken name is `DuplicateName`.
    ///
    /// The name is stored exactly as supplied; only a blank name is rejected.
    pub async fn insert(&self, name: &str, resume_text: &str) -> Result<CandidateId, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let result = sqlx::query("INSERT INTO candidates (name, resume_text) VALUES (?, ?)")
            .bind(name)
            .bind(resume_text)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!("Stored candidate {id} ({} chars of text)", resume_text.len());
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                warn!("Rejected duplicate candidate name '{name}'");
                Err(StoreError::DuplicateName(name.to_string()))
            }
            Err(e) => {
                error!("Candidate insert failed: {e}");
                Err(StoreError::StorageUnavailable(e))
            }
        }
    }

    /// Every candidate's identity pair, ascending by id (insertion order).
    pub async fn list_all(&self) -> Result<Vec<CandidateSummary>, StoreError> {
        Ok(
            sqlx::query_as::<_, CandidateSummary>("SELECT id, name FROM candidates ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Stored résumé text for `id`, or `None` when no such candidate exists.
    pub async fn get_text(&self, id: CandidateId) -> Result<Option<String>, StoreError> {
        Ok(
            sqlx::query_scalar::<_, String>("SELECT resume_text FROM candidates WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    pub async fn get(&self, id: CandidateId) -> Result<Option<CandidateRow>, StoreError> {
        Ok(sqlx::query_as::<_, CandidateRow>(
            "SELECT id, name, resume_text FROM candidates WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
