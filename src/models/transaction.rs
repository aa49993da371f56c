use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cart line item. A multi-item order produces several transactions
/// sharing the same customer and timestamp but consecutive identifiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Globally unique, monotonically assigned across all orders, from 1.
    pub id: u64,
    pub customer_id: u32,
    /// Identical for every line item of the same order.
    pub transaction_date: DateTime<Utc>,
    pub product_id: u32,
    /// 1, 2 or 3 units of this product.
    pub quantity: u32,
    /// price * quantity, rounded to 2 decimal places.
    pub total_value: Decimal,
}
