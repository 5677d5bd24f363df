//! Front desk — patient registration and today's queue.
//!
//! Backend for the first screen: take name / national id / address,
//! reuse or create the patient row, hand out today's queue number, and
//! project the day's queue for display.

use chrono::Local;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::db::repository::{create_registration, find_or_create_patient};
use crate::error::{require_non_empty, WorkflowError};
use crate::models::enums::VisitStatus;

/// What the desk hands the patient after registering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub patient_id: i64,
    pub registration_id: i64,
    pub queue_number: i64,
}

/// One row of today's queue display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntry {
    pub queue_number: i64,
    pub patient_name: String,
    pub status: VisitStatus,
}

/// Register (or recognize) a patient by national id.
///
/// Name and national id are required; address may be blank. A known
/// national id returns the existing patient id without touching the
/// stored name or address.
pub fn register_patient(
    conn: &Connection,
    name: &str,
    national_id: &str,
    address: &str,
) -> Result<i64, WorkflowError> {
    require_non_empty("name", name)?;
    require_non_empty("national id", national_id)?;

    let address = (!address.trim().is_empty()).then_some(address);
    Ok(find_or_create_patient(conn, name, national_id, address)?)
}

/// Queue the patient for a visit today and return the queue number.
pub fn create_visit(conn: &Connection, patient_id: i64) -> Result<i64, WorkflowError> {
    let today = Local::now().date_naive();
    let registration = create_registration(conn, patient_id, today)?;
    Ok(registration.queue_number)
}

/// The full desk action: register the patient, then queue them.
pub fn process_registration(
    conn: &Connection,
    name: &str,
    national_id: &str,
    address: &str,
) -> Result<RegistrationReceipt, WorkflowError> {
    let patient_id = register_patient(conn, name, national_id, address)?;
    let today = Local::now().date_naive();
    let registration = create_registration(conn, patient_id, today)?;
    Ok(RegistrationReceipt {
        patient_id,
        registration_id: registration.id,
        queue_number: registration.queue_number,
    })
}

/// Today's queue, in registration order.
pub fn today_queue(conn: &Connection) -> Result<Vec<QueueEntry>, WorkflowError> {
    let today = Local::now().date_naive();
    let mut stmt = conn.prepare(
        "SELECT r.queue_number, p.name, r.status
         FROM registrations r
         JOIN patients p ON r.patient_id = p.id
         WHERE r.visit_date = ?1
         ORDER BY r.id",
    )?;

    let rows = stmt.query_map(params![today], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut entries = Vec::new();
    for row in rows {
        let (queue_number, patient_name, status) = row?;
        entries.push(QueueEntry {
            queue_number,
            patient_name,
            status: status.parse::<VisitStatus>()?,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn registration_requires_name_and_national_id() {
        let conn = open_memory_database().unwrap();

        assert!(matches!(
            register_patient(&conn, "", "12345", "Jl. A"),
            Err(WorkflowError::Validation { field: "name" })
        ));
        assert!(matches!(
            register_patient(&conn, "Ani", "  ", "Jl. A"),
            Err(WorkflowError::Validation { field: "national id" })
        ));

        // Nothing was written by the rejected attempts.
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn desk_flow_assigns_sequential_queue_numbers() {
        let conn = open_memory_database().unwrap();

        let first = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();
        let second = process_registration(&conn, "Budi", "67890", "").unwrap();
        assert_eq!(first.queue_number, 1);
        assert_eq!(second.queue_number, 2);

        let queue = today_queue(&conn).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].patient_name, "Ani");
        assert_eq!(queue[0].status, VisitStatus::Waiting);
        assert_eq!(queue[1].queue_number, 2);
    }

    #[test]
    fn same_patient_can_visit_twice_in_one_day() {
        let conn = open_memory_database().unwrap();

        let first = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();
        let second = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();
        assert_eq!(first.patient_id, second.patient_id);
        assert_eq!(second.queue_number, 2);
    }
}
