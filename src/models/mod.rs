pub mod customer;
pub mod product;
pub mod product_view;
pub mod transaction;

pub use customer::Customer;
pub use product::Product;
pub use product_view::ProductView;
pub use transaction::Transaction;
