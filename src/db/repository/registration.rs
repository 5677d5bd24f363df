use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::enums::VisitStatus;
use crate::models::Registration;

/// Create a visit registration for the given date and assign its queue
/// number.
///
/// Queue numbers are scoped per calendar day, starting at 1. The
/// number is computed and the row inserted inside one transaction, so
/// sequential callers always see `1..N`; the `UNIQUE(visit_date,
/// queue_number)` constraint turns any duplicate assignment into a hard
/// error instead of a silently shared number.
pub fn create_registration(
    conn: &Connection,
    patient_id: i64,
    visit_date: NaiveDate,
) -> Result<Registration, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let queue_number: i64 = tx.query_row(
        "SELECT COALESCE(MAX(queue_number), 0) + 1 FROM registrations WHERE visit_date = ?1",
        params![visit_date],
        |row| row.get(0),
    )?;

    tx.execute(
        "INSERT INTO registrations (patient_id, visit_date, queue_number, status)
         VALUES (?1, ?2, ?3, ?4)",
        params![patient_id, visit_date, queue_number, VisitStatus::Waiting.as_str()],
    )?;
    let id = tx.last_insert_rowid();

    tx.commit()?;

    tracing::info!(registration_id = id, queue_number, "Visit registered");
    Ok(Registration {
        id,
        patient_id,
        visit_date,
        queue_number,
        status: VisitStatus::Waiting,
    })
}

pub fn get_registration(conn: &Connection, id: i64) -> Result<Registration, DatabaseError> {
    conn.query_row(
        "SELECT id, patient_id, visit_date, queue_number, status
         FROM registrations WHERE id = ?1",
        params![id],
        registration_from_row,
    )
    .optional()?
    .ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Registration".into(),
        id: id.to_string(),
    })?
}

/// Advance a registration to `to`, enforcing the linear lifecycle at
/// the storage boundary.
///
/// The update is guarded on the expected predecessor status, so a
/// registration that is not exactly one step behind `to` is left
/// untouched and the call fails with `InvalidTransition` (or `NotFound`
/// if the id does not exist). Callers that batch this with other writes
/// run it inside their own transaction.
pub fn transition_status(
    conn: &Connection,
    id: i64,
    to: VisitStatus,
) -> Result<(), DatabaseError> {
    let from = match to {
        VisitStatus::ExaminationDone => VisitStatus::Waiting,
        VisitStatus::Paid => VisitStatus::ExaminationDone,
        VisitStatus::Waiting => {
            // Nothing precedes waiting; moving back to it is never legal.
            let current = get_registration(conn, id)?;
            return Err(DatabaseError::InvalidTransition {
                id,
                found: current.status.as_str().into(),
                requested: to.as_str().into(),
            });
        }
    };

    let updated = conn.execute(
        "UPDATE registrations SET status = ?1 WHERE id = ?2 AND status = ?3",
        params![to.as_str(), id, from.as_str()],
    )?;

    if updated == 0 {
        // Distinguish a missing row from a row in the wrong state.
        let current = get_registration(conn, id)?;
        return Err(DatabaseError::InvalidTransition {
            id,
            found: current.status.as_str().into(),
            requested: to.as_str().into(),
        });
    }

    tracing::info!(registration_id = id, status = to.as_str(), "Status advanced");
    Ok(())
}

pub fn list_registrations_for_date(
    conn: &Connection,
    visit_date: NaiveDate,
) -> Result<Vec<Registration>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, visit_date, queue_number, status
         FROM registrations WHERE visit_date = ?1 ORDER BY id",
    )?;

    let rows = stmt.query_map(params![visit_date], registration_from_row)?;

    let mut registrations = Vec::new();
    for row in rows {
        registrations.push(row??);
    }
    Ok(registrations)
}

fn registration_from_row(
    row: &rusqlite::Row<'_>,
) -> Result<Result<Registration, DatabaseError>, rusqlite::Error> {
    let status_str: String = row.get(4)?;
    Ok((|| {
        Ok(Registration {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            visit_date: row.get(2)?,
            queue_number: row.get(3)?,
            status: status_str.parse::<VisitStatus>()?,
        })
    })())
}
