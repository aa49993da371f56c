use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// A catalog product. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential identifier, 1..=product_count.
    pub id: u32,

    /// Synthesized as "{category} {brand} {word}".
    pub name: String,

    pub category: Category,

    /// Always one of `category.brands()`.
    pub brand: String,

    /// Uniform in [30, 1500], exact to 2 decimal places.
    pub price: Decimal,

    pub created_at: DateTime<Utc>,

    /// Constant true today; reserved for future deactivation logic.
    pub is_active: bool,
}
