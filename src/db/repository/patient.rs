use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Patient;

pub fn insert_patient(
    conn: &Connection,
    name: &str,
    national_id: &str,
    address: Option<&str>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (name, national_id, address) VALUES (?1, ?2, ?3)",
        params![name, national_id, address],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_patient_by_national_id(
    conn: &Connection,
    national_id: &str,
) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            "SELECT id, name, national_id, address FROM patients WHERE national_id = ?1",
            params![national_id],
            patient_from_row,
        )
        .optional()?;
    Ok(patient)
}

/// Upsert-by-identity: an existing national id wins and its row is
/// returned unchanged, even if the caller supplies a different name or
/// address. Only unknown ids create a row.
pub fn find_or_create_patient(
    conn: &Connection,
    name: &str,
    national_id: &str,
    address: Option<&str>,
) -> Result<i64, DatabaseError> {
    if let Some(existing) = find_patient_by_national_id(conn, national_id)? {
        tracing::debug!(patient_id = existing.id, "Returning patient recognized by national id");
        return Ok(existing.id);
    }
    insert_patient(conn, name, national_id, address)
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Patient, DatabaseError> {
    conn.query_row(
        "SELECT id, name, national_id, address FROM patients WHERE id = ?1",
        params![id],
        patient_from_row,
    )
    .optional()?
    .ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Patient".into(),
        id: id.to_string(),
    })
}

fn patient_from_row(row: &rusqlite::Row<'_>) -> Result<Patient, rusqlite::Error> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        national_id: row.get(2)?,
        address: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn repeat_registration_reuses_patient_row() {
        let conn = open_memory_database().unwrap();

        let first = find_or_create_patient(&conn, "Ani", "12345", Some("Jl. A")).unwrap();
        let second = find_or_create_patient(&conn, "Ani", "12345", Some("Jl. A")).unwrap();
        assert_eq!(first, second);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn repeat_registration_does_not_update_attributes() {
        let conn = open_memory_database().unwrap();

        let id = find_or_create_patient(&conn, "Ani", "12345", Some("Jl. A")).unwrap();
        find_or_create_patient(&conn, "Ani Lestari", "12345", Some("Jl. B")).unwrap();

        let patient = get_patient(&conn, id).unwrap();
        assert_eq!(patient.name, "Ani");
        assert_eq!(patient.address.as_deref(), Some("Jl. A"));
    }

    #[test]
    fn unknown_patient_id_is_not_found() {
        let conn = open_memory_database().unwrap();
        let result = get_patient(&conn, 99);
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
