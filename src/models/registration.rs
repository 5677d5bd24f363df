use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::VisitStatus;

/// One patient's visit on one calendar day.
///
/// `queue_number` is the visit's position within its `visit_date`,
/// starting at 1. It is scoped per day, not globally unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub patient_id: i64,
    pub visit_date: NaiveDate,
    pub queue_number: i64,
    pub status: VisitStatus,
}
