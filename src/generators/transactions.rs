//! Cart-based transaction generation, the heart of the pipeline.
//!
//! Orders are not independently random rows: each one anchors on a category
//! from the customer's favorites, and later cart slots propagate a cross-sell
//! bias from that anchor. That is what puts category correlation inside
//! baskets (Footwear + Accessories, say) and makes the output worth pointing
//! a recommender or analytics exercise at.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::Category;
use crate::models::{Customer, Product, Transaction};
use crate::sampling::{datetime_in_window, uniform_choice, weighted_choice, IdSequence};

/// Cart sizes decay: half the orders are single-item.
const CART_SIZE_WEIGHTS: [f64; 5] = [0.5, 0.3, 0.15, 0.04, 0.01];

/// Per-line-item quantity distribution.
const QUANTITY_WEIGHTS: [f64; 3] = [0.65, 0.25, 0.10];
const QUANTITIES: [u32; 3] = [1, 2, 3];

/// Chance a non-anchor slot follows the anchor category's cross-sell list
/// (when it has one) instead of rerolling uniformly.
const CROSS_SELL_PROBABILITY: f64 = 0.6;

/// Products eligible for a cart slot of the given category.
///
/// Falls back to the entire catalog when the category has no products, so an
/// empty pool never aborts generation. Pure: no randomness, trivially
/// testable.
pub fn resolve_product_pool(category: Category, catalog: &[Product]) -> Vec<&Product> {
    let pool: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.category == category)
        .collect();
    if pool.is_empty() {
        catalog.iter().collect()
    } else {
        pool
    }
}

/// Category for one cart slot past the anchor: cross-sell biased when the
/// anchor has an affinity list, otherwise (or on the 40% reroll) uniform over
/// all categories — customer preference only steers the first slot.
fn slot_category<R: Rng + ?Sized>(
    rng: &mut R,
    base_category: Category,
    categories: &[Category],
) -> Category {
    if let Some(cross) = base_category.cross_sell() {
        if rng.gen_bool(CROSS_SELL_PROBABILITY) {
            return *uniform_choice(rng, cross);
        }
    }
    *uniform_choice(rng, categories)
}

/// Generate `order_count` orders against the customer population and catalog,
/// emitting one transaction per cart line item.
///
/// All line items of one order share the customer and the order instant;
/// identifiers come from `sequence`, which is global so ids stay gapless and
/// strictly increasing across the whole run.
pub fn generate_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    customers: &[Customer],
    catalog: &[Product],
    order_count: u32,
    max_items_per_order: u32,
    reference_time: DateTime<Utc>,
    lookback_window_days: u32,
    sequence: &mut IdSequence,
) -> Vec<Transaction> {
    let window_start = reference_time - Duration::days(lookback_window_days as i64);
    debug!(order_count, max_items_per_order, "generating orders");

    let categories = Category::all();
    let max_items = (max_items_per_order as usize).min(CART_SIZE_WEIGHTS.len());
    let cart_sizes: Vec<usize> = (1..=max_items).collect();
    let cart_weights = &CART_SIZE_WEIGHTS[..max_items];

    let mut transactions = Vec::with_capacity(order_count as usize * 2);

    for _ in 0..order_count {
        let customer = uniform_choice(rng, customers);
        let order_date = datetime_in_window(rng, window_start, lookback_window_days);
        let cart_size = *weighted_choice(rng, &cart_sizes, cart_weights);
        let base_category = *uniform_choice(rng, &customer.favorite_categories);

        let mut cart: Vec<&Product> = Vec::with_capacity(cart_size);
        for slot in 0..cart_size {
            let category = if slot == 0 {
                base_category
            } else {
                slot_category(rng, base_category, &categories)
            };
            let pool = resolve_product_pool(category, catalog);
            cart.push(*uniform_choice(rng, &pool));
        }

        for product in cart {
            let quantity = *weighted_choice(rng, &QUANTITIES, &QUANTITY_WEIGHTS);
            let total_value = (product.price * Decimal::from(quantity)).round_dp(2);
            transactions.push(Transaction {
                id: sequence.next_id(),
                customer_id: customer.id,
                transaction_date: order_date,
                product_id: product.id,
                quantity,
                total_value,
            });
        }
    }

    transactions
}
