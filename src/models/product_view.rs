use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::DeviceType;

/// A single product-view event. Views are independent; sessions are not
/// grouped across views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    /// Sequential identifier, 1..=view_count.
    pub id: u64,
    pub customer_id: u32,
    pub product_id: u32,
    pub view_datetime: DateTime<Utc>,
    /// Fresh token per view, drawn from the seeded RNG.
    pub session_id: Uuid,
    pub device_type: DeviceType,
}
