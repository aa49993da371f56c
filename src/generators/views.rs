use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::catalog::DeviceType;
use crate::models::{Customer, Product, ProductView};
use crate::sampling::{datetime_in_window, seeded_uuid, uniform_choice, weighted_choice};

const DEVICES: [DeviceType; 3] = [DeviceType::Desktop, DeviceType::Mobile, DeviceType::Tablet];
const DEVICE_WEIGHTS: [f64; 3] = [0.4, 0.5, 0.1];

/// Chance a view is restricted to the customer's favorite categories.
const FAVORITE_BIAS_PROBABILITY: f64 = 0.7;

/// Generate `view_count` independent product-view events, ids from 1.
///
/// With probability 0.7 the product is drawn from the union of the customer's
/// favorite categories (pooled, not per-category weighted); otherwise from the
/// full catalog. A customer whose favorite pool matches no product falls back
/// to the full catalog instead of failing.
pub fn generate_views<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &[Customer],
    catalog: &[Product],
    view_count: u32,
    reference_time: DateTime<Utc>,
    lookback_window_days: u32,
) -> Vec<ProductView> {
    let window_start = reference_time - Duration::days(lookback_window_days as i64);
    debug!(view_count, "generating product views");

    let mut views = Vec::with_capacity(view_count as usize);

    for id in 1..=view_count {
        let customer = uniform_choice(rng, customers);

        let product = if rng.gen_bool(FAVORITE_BIAS_PROBABILITY) {
            let pool: Vec<&Product> = catalog
                .iter()
                .filter(|p| customer.favorite_categories.contains(&p.category))
                .collect();
            if pool.is_empty() {
                uniform_choice(rng, catalog)
            } else {
                *uniform_choice(rng, &pool)
            }
        } else {
            uniform_choice(rng, catalog)
        };

        views.push(ProductView {
            id: id as u64,
            customer_id: customer.id,
            product_id: product.id,
            view_datetime: datetime_in_window(rng, window_start, lookback_window_days),
            session_id: seeded_uuid(rng),
            device_type: *weighted_choice(rng, &DEVICES, &DEVICE_WEIGHTS),
        });
    }

    views
}
