use rusqlite::Connection;

use crate::db::DatabaseError;
use crate::models::Medicine;

pub fn get_all_medicines(conn: &Connection) -> Result<Vec<Medicine>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, price FROM medicines ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Medicine {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn seeded_medicines_have_prices() {
        let conn = open_memory_database().unwrap();
        let medicines = get_all_medicines(&conn).unwrap();
        assert_eq!(medicines.len(), 3);
        assert_eq!(medicines[0].name, "Paracetamol");
        assert_eq!(medicines[0].price, 5000);
    }
}
