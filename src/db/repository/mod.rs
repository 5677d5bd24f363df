//! Repository layer — entity-scoped database operations.
//!
//! Functions take an explicit `&Connection`; the workflow surfaces own
//! transaction boundaries where an operation spans multiple writes.

mod doctor;
mod examination;
mod medicine;
mod patient;
mod registration;

pub use doctor::*;
pub use examination::*;
pub use medicine::*;
pub use patient::*;
pub use registration::*;
