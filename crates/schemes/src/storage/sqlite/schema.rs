//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every write returns the affected row with `RETURNING`
//! so callers never need a second lookup.

/// SQL statement to create all tables.
///
/// Foreign keys are off by default in SQLite; the step cascade depends on
/// the pragma being set on every connection.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Schemes table
CREATE TABLE IF NOT EXISTS schemes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    scheme_name TEXT NOT NULL UNIQUE
);

-- Steps table
CREATE TABLE IF NOT EXISTS steps (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    scheme_id INTEGER NOT NULL,
    step_number INTEGER NOT NULL,
    instructions TEXT NOT NULL,
    FOREIGN KEY (scheme_id) REFERENCES schemes(id) ON UPDATE CASCADE ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_steps_scheme_id ON steps(scheme_id);
"#;

// Scheme queries
pub const SELECT_SCHEMES: &str = r#"
SELECT id, scheme_name
FROM schemes
ORDER BY id ASC
"#;

pub const SELECT_SCHEME_BY_ID: &str = r#"
SELECT id, scheme_name
FROM schemes
WHERE id = ?1
"#;

pub const INSERT_SCHEME: &str = r#"
INSERT INTO schemes (scheme_name)
VALUES (?1)
RETURNING id, scheme_name
"#;

/// Absent fields are bound as NULL and keep their current value.
pub const UPDATE_SCHEME: &str = r#"
UPDATE schemes
SET scheme_name = COALESCE(?2, scheme_name)
WHERE id = ?1
RETURNING id, scheme_name
"#;

pub const DELETE_SCHEME: &str = r#"
DELETE FROM schemes
WHERE id = ?1
RETURNING id, scheme_name
"#;

// Step queries
pub const SELECT_STEPS_FOR_SCHEME: &str = r#"
SELECT st.id, st.scheme_id, st.step_number, st.instructions, sc.scheme_name
FROM steps st
INNER JOIN schemes sc ON st.scheme_id = sc.id
WHERE st.scheme_id = ?1
ORDER BY st.step_number ASC, st.id ASC
"#;

pub const INSERT_STEP: &str = r#"
INSERT INTO steps (scheme_id, step_number, instructions)
VALUES (?1, ?2, ?3)
RETURNING id, scheme_id, step_number, instructions
"#;

#[cfg(test)]
pub const COUNT_STEPS_FOR_SCHEME: &str = r#"
SELECT COUNT(*)
FROM steps
WHERE scheme_id = ?1
"#;
