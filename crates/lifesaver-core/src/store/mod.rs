//! Document store layer for LifeSaver.
//!
//! Each record kind lives in its own collection: a table of
//! `(id, doc)` rows where `doc` is the record's full JSON field map.
//! Timestamps travel inside the document as RFC 3339 strings and come
//! back as structured `chrono` values when a document is decoded into
//! its typed model.

mod alerts;
mod contacts;
mod medical;
mod schema;

pub use schema::*;
#[allow(unused_imports)]
pub use alerts::*;
#[allow(unused_imports)]
pub use contacts::*;
#[allow(unused_imports)]
pub use medical::*;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A document collection, one per record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    MedicalInfo,
    EmergencyContacts,
    SosAlerts,
}

impl Collection {
    /// Table backing this collection.
    pub fn table(&self) -> &'static str {
        match self {
            Collection::MedicalInfo => "medical_info",
            Collection::EmergencyContacts => "emergency_contacts",
            Collection::SosAlerts => "sos_alerts",
        }
    }

    /// Document field carrying the record's timestamp. Never overwritten
    /// by a replace.
    pub fn timestamp_field(&self) -> &'static str {
        match self {
            Collection::SosAlerts => "timestamp",
            _ => "created_at",
        }
    }

    /// Maximum number of records a list returns.
    pub fn list_cap(&self) -> usize {
        match self {
            Collection::SosAlerts => 100,
            _ => 1000,
        }
    }

    /// Whether listing orders newest-timestamp-first instead of storage
    /// order.
    fn sorted_by_timestamp(&self) -> bool {
        matches!(self, Collection::SosAlerts)
    }
}

/// Document store connection wrapper.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at path, creating collections if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Initialize schema.
    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Insert a record as a JSON document under the given id. Records
    /// arrive already stamped with id and timestamp.
    pub fn insert<T: Serialize>(
        &self,
        collection: Collection,
        id: &str,
        record: &T,
    ) -> StoreResult<()> {
        let doc = serde_json::to_string(record)?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", collection.table());
        self.conn.execute(&sql, params![id, doc])?;
        Ok(())
    }

    /// List up to the collection's cap. SOS alerts come back
    /// newest-timestamp-first; other collections in storage order.
    /// RFC 3339 strings order lexicographically, so the sort happens in
    /// SQL against the raw document field.
    pub fn list<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<T>> {
        let sql = if collection.sorted_by_timestamp() {
            format!(
                "SELECT doc FROM {} ORDER BY json_extract(doc, '$.{}') DESC LIMIT {}",
                collection.table(),
                collection.timestamp_field(),
                collection.list_cap()
            )
        } else {
            format!(
                "SELECT doc FROM {} ORDER BY rowid LIMIT {}",
                collection.table(),
                collection.list_cap()
            )
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for doc in rows {
            records.push(serde_json::from_str(&doc?)?);
        }
        Ok(records)
    }

    /// Get a record by id.
    pub fn get<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> StoreResult<Option<T>> {
        let sql = format!("SELECT doc FROM {} WHERE id = ?", collection.table());
        let doc: Option<String> = self
            .conn
            .query_row(&sql, [id], |row| row.get(0))
            .optional()?;
        doc.map(|d| serde_json::from_str(&d))
            .transpose()
            .map_err(Into::into)
    }

    /// Overwrite the document's fields with `fields`, keeping the original
    /// id and timestamp untouched. Returns the updated record.
    pub fn replace<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
        fields: &Value,
    ) -> StoreResult<T> {
        let select = format!("SELECT doc FROM {} WHERE id = ?", collection.table());
        let existing: Option<String> = self
            .conn
            .query_row(&select, [id], |row| row.get(0))
            .optional()?;
        let existing = existing.ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut doc: Value = serde_json::from_str(&existing)?;
        if let (Value::Object(doc_map), Value::Object(new_fields)) = (&mut doc, fields) {
            for (key, value) in new_fields {
                if key == "id" || key == collection.timestamp_field() {
                    continue;
                }
                doc_map.insert(key.clone(), value.clone());
            }
        }

        let update = format!("UPDATE {} SET doc = ?2 WHERE id = ?1", collection.table());
        self.conn
            .execute(&update, params![id, serde_json::to_string(&doc)?])?;

        serde_json::from_value(doc).map_err(Into::into)
    }

    /// Delete a record by id. Returns whether a document matched.
    pub fn delete(&self, collection: Collection, id: &str) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", collection.table());
        let rows_affected = self.conn.execute(&sql, [id])?;
        Ok(rows_affected > 0)
    }
}
