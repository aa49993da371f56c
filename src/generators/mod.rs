//! The four generation stages, in pipeline order: customers, products,
//! cart-based transactions, preference-biased views.

pub mod customers;
pub mod products;
pub mod transactions;
pub mod views;

pub use customers::generate_customers;
pub use products::generate_products;
pub use transactions::{generate_transactions, resolve_product_pool};
pub use views::generate_views;
