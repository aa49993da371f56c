//! Fixed catalog vocabulary: categories, brands, the cross-sell map, and the
//! small enumerations shared by the whole pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Product category. The set is fixed for the whole run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Category {
    Clothing,
    Footwear,
    Accessories,
    Electronics,
    Home,
}

impl Category {
    /// Every category, in declaration order.
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Brands that may be assigned to products of this category. Never empty.
    pub fn brands(&self) -> &'static [&'static str] {
        match self {
            Category::Clothing => &["Nike", "Adidas", "Puma", "Reserva"],
            Category::Footwear => &["Nike", "Adidas", "Puma", "Mizuno"],
            Category::Accessories => &["Rayban", "Oakley", "Apple", "Samsung"],
            Category::Electronics => &["Apple", "Samsung", "LG", "Sony"],
            Category::Home => &["Tramontina", "Brastemp", "Electrolux"],
        }
    }

    /// Categories commonly co-purchased with this one. Partial: categories
    /// without a cross-sell affinity return `None`, and cart slots after the
    /// first then fall through to a uniform category pick.
    pub fn cross_sell(&self) -> Option<&'static [Category]> {
        match self {
            Category::Footwear => Some(&[Category::Accessories]),
            Category::Electronics => Some(&[Category::Accessories]),
            Category::Home => Some(&[Category::Home]),
            Category::Clothing => Some(&[Category::Accessories]),
            Category::Accessories => None,
        }
    }
}

/// Customer gender, exported as its single-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Gender {
    #[strum(serialize = "M")]
    #[serde(rename = "M")]
    Male,
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Female,
    #[strum(serialize = "O")]
    #[serde(rename = "O")]
    Other,
}

/// Device a product view originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}
