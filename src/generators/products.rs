use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::Category;
use crate::identity::IdentityProvider;
use crate::models::Product;
use crate::sampling::{datetime_in_window, uniform_choice};

/// Price bounds in cents. Sampling whole cents keeps "uniform in [30, 1500]
/// to 2 decimal places" exact instead of rounding a float draw.
const MIN_PRICE_CENTS: i64 = 30_00;
const MAX_PRICE_CENTS: i64 = 1500_00;

/// Generate the product catalog: `count` records with sequential ids from 1.
/// Brand is always drawn from the assigned category's own brand list.
pub fn generate_products<R: Rng + ?Sized>(
    rng: &mut R,
    provider: &IdentityProvider,
    count: u32,
    reference_time: DateTime<Utc>,
    lookback_window_days: u32,
) -> Vec<Product> {
    let window_start = reference_time - Duration::days(lookback_window_days as i64);
    debug!(count, "generating product catalog");

    let categories = Category::all();
    let mut products = Vec::with_capacity(count as usize);

    for id in 1..=count {
        let category = *uniform_choice(rng, &categories);
        let brand = (*uniform_choice(rng, category.brands())).to_string();
        let name = format!("{} {} {}", category, brand, provider.product_word(rng));
        let price = Decimal::new(rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS), 2);
        let created_at = datetime_in_window(rng, window_start, lookback_window_days);

        products.push(Product {
            id,
            name,
            category,
            brand,
            price,
            created_at,
            is_active: true,
        });
    }

    products
}
