use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Doctor;

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, name, specialty FROM doctors ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
            specialty: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn get_doctor(conn: &Connection, id: i64) -> Result<Doctor, DatabaseError> {
    conn.query_row(
        "SELECT id, name, specialty FROM doctors WHERE id = ?1",
        params![id],
        |row| {
            Ok(Doctor {
                id: row.get(0)?,
                name: row.get(1)?,
                specialty: row.get(2)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Doctor".into(),
        id: id.to_string(),
    })
}
