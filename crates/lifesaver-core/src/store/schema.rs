//! SQLite schema definition.

/// Complete store schema for LifeSaver.
///
/// Each record kind gets its own collection table. A document is stored
/// whole as JSON text keyed by its id; everything else about a record's
/// shape lives inside the document.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Medical profiles
-- ============================================================================

CREATE TABLE IF NOT EXISTS medical_info (
    id TEXT PRIMARY KEY,
    doc TEXT NOT NULL
);

-- ============================================================================
-- Emergency contacts
-- ============================================================================

CREATE TABLE IF NOT EXISTS emergency_contacts (
    id TEXT PRIMARY KEY,
    doc TEXT NOT NULL
);

-- ============================================================================
-- SOS alerts
-- ============================================================================

CREATE TABLE IF NOT EXISTS sos_alerts (
    id TEXT PRIMARY KEY,
    doc TEXT NOT NULL
);

-- Alerts list newest-first; index the timestamp inside the document
CREATE INDEX IF NOT EXISTS idx_sos_alerts_timestamp
    ON sos_alerts(json_extract(doc, '$.timestamp'));
"#;
