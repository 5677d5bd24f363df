use serde::{Deserialize, Serialize};

/// A clinic patient, uniquely identified by national id.
///
/// Created on first registration and never mutated afterwards — repeat
/// visits reuse the existing row even if the desk types a different
/// name or address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub address: Option<String>,
}
