//! Empirical checks of the sampled distributions over large runs. Tolerances
//! are generous enough that a correct implementation never flakes at these
//! sample sizes.

use chrono::{TimeZone, Utc};
use commerce_datagen::generators::{generate_transactions, generate_views};
use commerce_datagen::identity::IdentityProvider;
use commerce_datagen::sampling::IdSequence;
use commerce_datagen::{generators, models::Transaction};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn half_of_all_carts_hold_a_single_item() {
    let now = reference_time();
    let mut rng = StdRng::seed_from_u64(1234);
    let mut provider = IdentityProvider::new();
    let customers =
        generators::generate_customers(&mut rng, &mut provider, 200, now, 365).unwrap();
    let products = generators::generate_products(&mut rng, &provider, 300, now, 365);

    let orders = 100_000u32;
    let mut seq = IdSequence::default();
    let txns = generate_transactions(
        &mut rng, &customers, &products, orders, 5, now, 365, &mut seq,
    );

    let mut single_item_orders = 0u32;
    let mut order_len = 1usize;
    let mut total_orders = 0u32;
    let close = |order_len: usize, single: &mut u32, total: &mut u32| {
        if order_len == 1 {
            *single += 1;
        }
        *total += 1;
    };
    for pair in txns.windows(2) {
        if same_order(&pair[0], &pair[1]) {
            order_len += 1;
        } else {
            close(order_len, &mut single_item_orders, &mut total_orders);
            order_len = 1;
        }
    }
    close(order_len, &mut single_item_orders, &mut total_orders);

    assert_eq!(total_orders, orders);
    let freq = single_item_orders as f64 / total_orders as f64;
    assert!(
        (0.48..=0.52).contains(&freq),
        "single-item cart frequency {freq} outside 0.5 +/- 0.02"
    );
}

fn same_order(a: &Transaction, b: &Transaction) -> bool {
    a.customer_id == b.customer_id && a.transaction_date == b.transaction_date
}

#[test]
fn views_hit_favorite_categories_at_the_biased_rate() {
    let now = reference_time();
    let mut rng = StdRng::seed_from_u64(5678);
    let mut provider = IdentityProvider::new();
    let customers =
        generators::generate_customers(&mut rng, &mut provider, 200, now, 365).unwrap();
    let products = generators::generate_products(&mut rng, &provider, 300, now, 365);

    let views = generate_views(&mut rng, &customers, &products, 100_000, now, 365);

    let favorite_hits = views
        .iter()
        .filter(|v| {
            let customer = &customers[(v.customer_id - 1) as usize];
            let product = &products[(v.product_id - 1) as usize];
            customer.favorite_categories.contains(&product.category)
        })
        .count();
    let rate = favorite_hits as f64 / views.len() as f64;

    // 0.7 direct bias plus the unbiased 0.3 landing in favorites by chance
    // (favorites cover 2.5 of 5 categories on average): about 0.85.
    assert!(
        (0.80..=0.90).contains(&rate),
        "favorite-category view rate {rate} outside expected band"
    );
}

#[test]
fn device_types_follow_their_weights() {
    let now = reference_time();
    let mut rng = StdRng::seed_from_u64(91011);
    let mut provider = IdentityProvider::new();
    let customers =
        generators::generate_customers(&mut rng, &mut provider, 50, now, 365).unwrap();
    let products = generators::generate_products(&mut rng, &provider, 100, now, 365);

    let views = generate_views(&mut rng, &customers, &products, 50_000, now, 365);
    let mobile = views
        .iter()
        .filter(|v| v.device_type == commerce_datagen::catalog::DeviceType::Mobile)
        .count() as f64
        / views.len() as f64;
    assert!((0.48..=0.52).contains(&mobile), "mobile share {mobile}");
}
