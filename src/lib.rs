//! Klinika — single-clinic front-desk, examination and cashier workflow.
//!
//! The core is a three-state visit lifecycle (waiting →
//! examination_done → paid) and a per-day queue numbering rule, backed
//! by a local SQLite file. Operations take an explicitly passed
//! `rusqlite::Connection`; there is one local user and no concurrency.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub mod cashier; // payment screen
pub mod exam_room; // doctor screen
pub mod front_desk; // registration screen

pub use error::WorkflowError;
