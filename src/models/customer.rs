use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Gender};

/// A synthetic customer. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Sequential identifier, 1..=customer_count.
    pub id: u32,

    /// Display name from the identity provider.
    pub name: String,

    /// Unique across the whole population.
    pub email: String,

    pub gender: Gender,

    /// Uniform in [18, 65).
    pub age: u8,

    pub city: String,

    /// State/region code.
    pub state: String,

    /// When the customer registered; uniform over twice the lookback window.
    pub registration_date: DateTime<Utc>,

    /// 2 or 3 distinct categories this customer gravitates towards. Anchors
    /// both cart composition and view biasing downstream.
    pub favorite_categories: Vec<Category>,
}
