//! Interactive terminal menu wiring the three workflow screens to the
//! local database. All layout here is presentation glue; the behavior
//! lives in the library modules.

use std::io::{self, BufRead, Write};

use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use klinika::{cashier, config, db, exam_room, front_desk};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Any storage failure here is fatal; there is no recovery path
    // before the schema exists.
    std::fs::create_dir_all(config::app_data_dir())
        .expect("Cannot create application data directory");
    let conn = db::open_database(&config::database_path())
        .expect("Cannot open clinic database");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== {} ===", config::APP_NAME);
        println!("1) Front desk — registration & queue");
        println!("2) Exam room — record examination");
        println!("3) Cashier — payment");
        println!("0) Quit");

        match prompt(&mut lines, "> ").as_deref() {
            Some("1") => front_desk_screen(&conn, &mut lines),
            Some("2") => exam_room_screen(&conn, &mut lines),
            Some("3") => cashier_screen(&conn, &mut lines),
            Some("0") | None => break,
            Some(_) => println!("Unknown choice"),
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok();
    lines.next()?.ok().map(|l| l.trim().to_string())
}

fn front_desk_screen(conn: &Connection, lines: &mut impl Iterator<Item = io::Result<String>>) {
    match front_desk::today_queue(conn) {
        Ok(queue) => {
            println!("Today's queue:");
            for entry in queue {
                println!(
                    "  #{} {} [{}]",
                    entry.queue_number,
                    entry.patient_name,
                    entry.status.as_str()
                );
            }
        }
        Err(e) => println!("Error: {e}"),
    }

    let Some(name) = prompt(lines, "Patient name: ") else { return };
    let Some(national_id) = prompt(lines, "National id: ") else { return };
    let Some(address) = prompt(lines, "Address: ") else { return };

    match front_desk::process_registration(conn, &name, &national_id, &address) {
        Ok(receipt) => println!("Registered. Queue number: {}", receipt.queue_number),
        Err(e) => println!("Error: {e}"),
    }
}

fn exam_room_screen(conn: &Connection, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let waiting = match exam_room::waiting_list(conn) {
        Ok(w) => w,
        Err(e) => return println!("Error: {e}"),
    };
    if waiting.is_empty() {
        return println!("No waiting patients.");
    }
    for visit in &waiting {
        println!(
            "  {} - {} (queue #{})",
            visit.registration_id, visit.patient_name, visit.queue_number
        );
    }

    let doctors = match db::get_all_doctors(conn) {
        Ok(d) => d,
        Err(e) => return println!("Error: {e}"),
    };
    for doctor in &doctors {
        println!("  doctor {} - {} ({})", doctor.id, doctor.name, doctor.specialty);
    }

    let Some(reg) = prompt(lines, "Registration id: ") else { return };
    let Ok(registration_id) = reg.parse::<i64>() else { return };
    let Some(doc) = prompt(lines, "Doctor id: ") else { return };
    let Ok(doctor_id) = doc.parse::<i64>() else { return };
    let Some(complaint) = prompt(lines, "Complaint: ") else { return };
    let Some(diagnosis) = prompt(lines, "Diagnosis: ") else { return };
    let Some(blood_pressure) = prompt(lines, "Blood pressure: ") else { return };

    let input = exam_room::ExaminationInput {
        doctor_id,
        complaint,
        diagnosis,
        blood_pressure,
        weight_kg: None,
    };
    match exam_room::complete_examination(conn, registration_id, &input) {
        Ok(()) => println!("Examination recorded; sent to cashier."),
        Err(e) => println!("Error: {e}"),
    }
}

fn cashier_screen(conn: &Connection, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let bills = match cashier::billing_list(conn) {
        Ok(b) => b,
        Err(e) => return println!("Error: {e}"),
    };
    if bills.is_empty() {
        return println!("No open bills.");
    }
    for bill in &bills {
        println!("  {} - {}", bill.registration_id, bill.patient_name);
    }

    let Some(reg) = prompt(lines, "Registration id: ") else { return };
    let Ok(registration_id) = reg.parse::<i64>() else { return };

    match cashier::pay(conn, registration_id) {
        Ok(receipt) => println!("Paid. Total: Rp {}", receipt.amount_charged),
        Err(e) => println!("Error: {e}"),
    }
}
