pub mod enums;

mod doctor;
mod examination;
mod medicine;
mod patient;
mod registration;

pub use doctor::Doctor;
pub use examination::Examination;
pub use medicine::Medicine;
pub use patient::Patient;
pub use registration::Registration;
