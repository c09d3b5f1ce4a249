//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows to domain types.

use rusqlite::Row;
use schemes_core::scheme::{Scheme, SchemeStep, Step};

/// Convert a SQLite row to a Scheme.
///
/// Expected columns: id, scheme_name
pub fn row_to_scheme(row: &Row) -> rusqlite::Result<Scheme> {
    Ok(Scheme {
        id: row.get(0)?,
        scheme_name: row.get(1)?,
    })
}

/// Convert a SQLite row to a Step.
///
/// Expected columns: id, scheme_id, step_number, instructions
pub fn row_to_step(row: &Row) -> rusqlite::Result<Step> {
    Ok(Step {
        id: row.get(0)?,
        scheme_id: row.get(1)?,
        step_number: row.get(2)?,
        instructions: row.get(3)?,
    })
}

/// Convert a step row joined with its scheme to a SchemeStep.
///
/// Expected columns: id, scheme_id, step_number, instructions, scheme_name
pub fn row_to_scheme_step(row: &Row) -> rusqlite::Result<SchemeStep> {
    let step = row_to_step(row)?;
    let scheme_name: String = row.get(4)?;

    Ok(SchemeStep::project(step, scheme_name))
}
