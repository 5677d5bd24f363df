use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Examination;

pub fn insert_examination(
    conn: &Connection,
    registration_id: i64,
    doctor_id: i64,
    complaint: &str,
    diagnosis: &str,
    blood_pressure: &str,
    weight_kg: Option<i64>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO examinations
         (registration_id, doctor_id, complaint, diagnosis, blood_pressure, weight_kg)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![registration_id, doctor_id, complaint, diagnosis, blood_pressure, weight_kg],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_examination_for_registration(
    conn: &Connection,
    registration_id: i64,
) -> Result<Option<Examination>, DatabaseError> {
    let examination = conn
        .query_row(
            "SELECT id, registration_id, doctor_id, complaint, diagnosis, blood_pressure, weight_kg
             FROM examinations WHERE registration_id = ?1",
            params![registration_id],
            |row| {
                Ok(Examination {
                    id: row.get(0)?,
                    registration_id: row.get(1)?,
                    doctor_id: row.get(2)?,
                    complaint: row.get(3)?,
                    diagnosis: row.get(4)?,
                    blood_pressure: row.get(5)?,
                    weight_kg: row.get(6)?,
                })
            },
        )
        .optional()?;
    Ok(examination)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::repository::{create_registration, find_or_create_patient};
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn one_examination_per_registration() {
        let conn = open_memory_database().unwrap();
        let patient = find_or_create_patient(&conn, "Ani", "12345", None).unwrap();
        let reg = create_registration(
            &conn,
            patient,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap();

        insert_examination(&conn, reg.id, 1, "Fever", "Flu", "120/80", Some(62)).unwrap();

        // The one-to-one constraint rejects a second examination.
        let second = insert_examination(&conn, reg.id, 2, "Fever", "Flu", "120/80", None);
        assert!(second.is_err());

        let exam = get_examination_for_registration(&conn, reg.id)
            .unwrap()
            .unwrap();
        assert_eq!(exam.diagnosis, "Flu");
        assert_eq!(exam.weight_kg, Some(62));
    }

    #[test]
    fn missing_examination_is_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_examination_for_registration(&conn, 7).unwrap().is_none());
    }
}
