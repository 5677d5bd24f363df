use serde::{Deserialize, Serialize};

/// The doctor's findings for one visit. One-to-one with a registration,
/// written once when the examination completes and never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Examination {
    pub id: i64,
    pub registration_id: i64,
    pub doctor_id: i64,
    pub complaint: String,
    pub diagnosis: String,
    pub blood_pressure: String,
    pub weight_kg: Option<i64>,
}
