//! Pipeline orchestration: the four stages in strict order, one seeded RNG
//! threaded through everything.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::errors::DataGenResult;
use crate::export;
use crate::generators::{
    generate_customers, generate_products, generate_transactions, generate_views,
};
use crate::identity::IdentityProvider;
use crate::models::{Customer, Product, ProductView, Transaction};
use crate::sampling::IdSequence;

/// The four generated tables, fully materialized in memory.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub product_views: Vec<ProductView>,
}

/// Runs the generation stages sequentially. Everything random — including the
/// identity provider and session UUIDs — draws from the single `StdRng` seeded
/// from the configuration, so a fixed `(seed, config, reference_time)` triple
/// replays byte-identically.
pub struct Pipeline {
    config: GeneratorConfig,
    rng: StdRng,
    provider: IdentityProvider,
    reference_time: DateTime<Utc>,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.random_seed);
        Self {
            config,
            rng,
            provider: IdentityProvider::new(),
            reference_time: Utc::now(),
        }
    }

    /// Pin the instant date windows are anchored to. Needed for reproducible
    /// runs across process boundaries; the CLI leaves it at `Utc::now()`.
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Generate all four tables in memory without touching the filesystem.
    pub fn generate(mut self) -> DataGenResult<Dataset> {
        let customers = self.customers_stage()?;
        let products = self.products_stage();
        let transactions = self.transactions_stage(&customers, &products);
        let product_views = self.views_stage(&customers, &products);
        Ok(Dataset {
            customers,
            products,
            transactions,
            product_views,
        })
    }

    /// Generate and export: each table is written as soon as its stage
    /// completes, in pipeline order.
    pub fn run(mut self) -> DataGenResult<Dataset> {
        let output_dir = self.config.output_dir.clone();

        let customers = self.customers_stage()?;
        export::write_customers(&output_dir, &customers)?;

        let products = self.products_stage();
        export::write_products(&output_dir, &products)?;

        let transactions = self.transactions_stage(&customers, &products);
        export::write_transactions(&output_dir, &transactions)?;

        let product_views = self.views_stage(&customers, &products);
        export::write_product_views(&output_dir, &product_views)?;

        Ok(Dataset {
            customers,
            products,
            transactions,
            product_views,
        })
    }

    fn customers_stage(&mut self) -> DataGenResult<Vec<Customer>> {
        info!(count = self.config.customer_count, "generating customers");
        generate_customers(
            &mut self.rng,
            &mut self.provider,
            self.config.customer_count,
            self.reference_time,
            self.config.lookback_window_days,
        )
    }

    fn products_stage(&mut self) -> Vec<Product> {
        info!(count = self.config.product_count, "generating products");
        generate_products(
            &mut self.rng,
            &self.provider,
            self.config.product_count,
            self.reference_time,
            self.config.lookback_window_days,
        )
    }

    fn transactions_stage(
        &mut self,
        customers: &[Customer],
        products: &[Product],
    ) -> Vec<Transaction> {
        info!(orders = self.config.order_count, "generating transactions");
        let mut sequence = IdSequence::default();
        generate_transactions(
            &mut self.rng,
            customers,
            products,
            self.config.order_count,
            self.config.max_items_per_order,
            self.reference_time,
            self.config.lookback_window_days,
            &mut sequence,
        )
    }

    fn views_stage(&mut self, customers: &[Customer], products: &[Product]) -> Vec<ProductView> {
        info!(count = self.config.view_count, "generating product views");
        generate_views(
            &mut self.rng,
            customers,
            products,
            self.config.view_count,
            self.reference_time,
            self.config.lookback_window_days,
        )
    }
}
