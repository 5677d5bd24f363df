use std::path::Path;

use rusqlite::Connection;
use tracing;

use super::DatabaseError;

/// Open a SQLite connection to the given path, run migrations and seed
/// reference data
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    seed_reference_data(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    seed_reference_data(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![
        (1, include_str!("../../resources/migrations/001_initial.sql")),
    ];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql).map_err(|e| DatabaseError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Seed doctor and medicine reference rows, only if the tables are empty.
///
/// Safe to call on every startup; an already-seeded (or manually edited)
/// table is left untouched.
pub fn seed_reference_data(conn: &Connection) -> Result<(), DatabaseError> {
    let doctor_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
    if doctor_count == 0 {
        tracing::info!("Seeding doctor reference data");
        conn.execute_batch(
            "INSERT INTO doctors (name, specialty) VALUES ('Dr. Faqih', 'General Medicine');
             INSERT INTO doctors (name, specialty) VALUES ('Dr. Sarah', 'Internal Medicine');",
        )?;
    }

    let medicine_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM medicines", [], |row| row.get(0))?;
    if medicine_count == 0 {
        tracing::info!("Seeding medicine reference data");
        conn.execute_batch(
            "INSERT INTO medicines (name, price) VALUES ('Paracetamol', 5000);
             INSERT INTO medicines (name, price) VALUES ('Amoxicillin', 12000);
             INSERT INTO medicines (name, price) VALUES ('Vitamin C', 3000);",
        )?;
    }

    Ok(())
}

/// Get the current schema version (0 if no schema exists yet)
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row(
        "SELECT MAX(version) FROM schema_version",
        [],
        |row| row.get::<_, i64>(0),
    )
    .unwrap_or(0)
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
