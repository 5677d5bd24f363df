use serde::{Deserialize, Serialize};

/// Reference data: a stocked medicine with its unit price in rupiah.
///
/// Modeled for future itemized billing; the cashier currently charges a
/// flat service fee and does not consult this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub price: i64,
}
