//! LifeSaver Core Library
//!
//! Domain models and document store for the LifeSaver emergency API.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler ──► typed create shape (MedicalInfoCreate, ...)
//!                        │
//!                 stored shape stamped with id + timestamp
//!                        │
//!        ┌───────────────▼───────────────┐
//!        │         Store adapter         │
//!        │  one collection per kind      │
//!        │  document = JSON field map    │
//!        │  timestamps = RFC 3339 text   │
//!        └───────────────┬───────────────┘
//!                        │
//!                     SQLite
//! ```
//!
//! # Modules
//!
//! - [`models`]: the three record kinds, each with a create (input) and a
//!   stored (output) shape
//! - [`store`]: schemaless document store over SQLite

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{
    EmergencyContact, EmergencyContactCreate, MedicalInfo, MedicalInfoCreate, SosAlert,
    SosAlertCreate,
};
pub use store::{Collection, Store, StoreError, StoreResult};
