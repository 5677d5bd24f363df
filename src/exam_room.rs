//! Exam room — the doctor's screen.
//!
//! Lists waiting visits, offers the seeded doctors, and records the
//! examination result. Recording advances the visit to
//! `examination_done`; the guard and the examination insert commit
//! together, so a visit can never end up examined without the status
//! (or the other way around).

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::db::repository::{get_doctor, insert_examination, transition_status};
use crate::error::WorkflowError;
use crate::models::enums::VisitStatus;

/// A waiting visit the doctor can pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitSummary {
    pub registration_id: i64,
    pub queue_number: i64,
    pub patient_name: String,
}

/// The doctor's input for one examination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExaminationInput {
    pub doctor_id: i64,
    pub complaint: String,
    pub diagnosis: String,
    pub blood_pressure: String,
    pub weight_kg: Option<i64>,
}

/// All visits still waiting, oldest registration first.
pub fn waiting_list(conn: &Connection) -> Result<Vec<VisitSummary>, WorkflowError> {
    list_by_status(conn, VisitStatus::Waiting)
}

pub(crate) fn list_by_status(
    conn: &Connection,
    status: VisitStatus,
) -> Result<Vec<VisitSummary>, WorkflowError> {
    let mut stmt = conn.prepare(
        "SELECT r.id, r.queue_number, p.name
         FROM registrations r
         JOIN patients p ON r.patient_id = p.id
         WHERE r.status = ?1
         ORDER BY r.id",
    )?;

    let rows = stmt.query_map(params![status.as_str()], |row| {
        Ok(VisitSummary {
            registration_id: row.get(0)?,
            queue_number: row.get(1)?,
            patient_name: row.get(2)?,
        })
    })?;

    let mut visits = Vec::new();
    for row in rows {
        visits.push(row?);
    }
    Ok(visits)
}

/// Record an examination and advance the visit to `examination_done`.
///
/// Rejected when the registration is missing or not in `waiting`: no
/// examination row is written and the status is untouched. Both writes
/// run in one transaction.
pub fn complete_examination(
    conn: &Connection,
    registration_id: i64,
    input: &ExaminationInput,
) -> Result<(), WorkflowError> {
    // Fail before the transaction if the doctor id is bogus.
    get_doctor(conn, input.doctor_id)?;

    let tx = conn.unchecked_transaction()?;

    transition_status(&tx, registration_id, VisitStatus::ExaminationDone)?;
    insert_examination(
        &tx,
        registration_id,
        input.doctor_id,
        &input.complaint,
        &input.diagnosis,
        &input.blood_pressure,
        input.weight_kg,
    )?;

    tx.commit()?;

    tracing::info!(registration_id, doctor_id = input.doctor_id, "Examination recorded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::get_examination_for_registration;
    use crate::db::sqlite::open_memory_database;
    use crate::db::DatabaseError;
    use crate::front_desk::process_registration;

    fn flu_input() -> ExaminationInput {
        ExaminationInput {
            doctor_id: 1,
            complaint: "Fever and cough".into(),
            diagnosis: "Flu".into(),
            blood_pressure: "120/80".into(),
            weight_kg: None,
        }
    }

    #[test]
    fn examination_moves_visit_off_the_waiting_list() {
        let conn = open_memory_database().unwrap();
        let receipt = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();

        assert_eq!(waiting_list(&conn).unwrap().len(), 1);
        complete_examination(&conn, receipt.registration_id, &flu_input()).unwrap();
        assert!(waiting_list(&conn).unwrap().is_empty());

        let exam = get_examination_for_registration(&conn, receipt.registration_id)
            .unwrap()
            .unwrap();
        assert_eq!(exam.diagnosis, "Flu");
    }

    #[test]
    fn double_examination_is_rejected_without_side_effects() {
        let conn = open_memory_database().unwrap();
        let receipt = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();

        complete_examination(&conn, receipt.registration_id, &flu_input()).unwrap();
        let again = complete_examination(&conn, receipt.registration_id, &flu_input());
        assert!(matches!(
            again,
            Err(WorkflowError::Database(DatabaseError::InvalidTransition { .. }))
        ));

        // Still exactly one examination row.
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM examinations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_doctor_writes_nothing() {
        let conn = open_memory_database().unwrap();
        let receipt = process_registration(&conn, "Ani", "12345", "Jl. A").unwrap();

        let mut input = flu_input();
        input.doctor_id = 42;
        let result = complete_examination(&conn, receipt.registration_id, &input);
        assert!(matches!(
            result,
            Err(WorkflowError::Database(DatabaseError::NotFound { .. }))
        ));

        // Visit is still waiting and unexamined.
        assert_eq!(waiting_list(&conn).unwrap().len(), 1);
        assert!(get_examination_for_registration(&conn, receipt.registration_id)
            .unwrap()
            .is_none());
    }

    #[test]
    fn missing_registration_is_rejected() {
        let conn = open_memory_database().unwrap();
        let result = complete_examination(&conn, 99, &flu_input());
        assert!(matches!(
            result,
            Err(WorkflowError::Database(DatabaseError::NotFound { .. }))
        ));
    }
}
