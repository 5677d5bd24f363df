use serde::{Deserialize, Serialize};

/// Reference data: an examining doctor. Seeded once, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}
