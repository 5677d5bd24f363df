//! Cashier — billing list and payment.
//!
//! Lists visits whose examination is done and settles them for the
//! flat service fee. No receipt is persisted; the returned amount is
//! display-only.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::config::FLAT_SERVICE_FEE;
use crate::db::repository::transition_status;
use crate::error::WorkflowError;
use crate::exam_room::{list_by_status, VisitSummary};
use crate::models::enums::VisitStatus;

/// A settled bill, handed back for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub registration_id: i64,
    pub amount_charged: i64,
}

/// Visits ready to pay (status `examination_done`), oldest first.
pub fn billing_list(conn: &Connection) -> Result<Vec<VisitSummary>, WorkflowError> {
    list_by_status(conn, VisitStatus::ExaminationDone)
}

/// Settle a visit: advance it to `paid` and charge the flat fee.
///
/// Rejected when the registration is missing or not in
/// `examination_done`; the status is untouched in that case.
pub fn pay(conn: &Connection, registration_id: i64) -> Result<PaymentReceipt, WorkflowError> {
    transition_status(conn, registration_id, VisitStatus::Paid)?;

    tracing::info!(registration_id, amount = FLAT_SERVICE_FEE, "Payment recorded");
    Ok(PaymentReceipt {
        registration_id,
        amount_charged: FLAT_SERVICE_FEE,
    })
}
