use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use commerce_datagen::{config, GeneratorConfig, Pipeline};

/// Generate a deterministic synthetic e-commerce dataset as CSV tables.
#[derive(Parser)]
#[command(name = "datagen", version, about)]
struct Cli {
    /// Config file stem (TOML), e.g. "config/generator"
    #[arg(long)]
    config: Option<String>,

    /// Number of customers to generate
    #[arg(long)]
    customers: Option<u32>,

    /// Number of catalog products to generate
    #[arg(long)]
    products: Option<u32>,

    /// Number of orders to generate
    #[arg(long)]
    orders: Option<u32>,

    /// Maximum cart size per order (1-5)
    #[arg(long)]
    max_items: Option<u32>,

    /// Number of product-view events to generate
    #[arg(long)]
    views: Option<u32>,

    /// Date window in days for orders and views
    #[arg(long)]
    lookback_days: Option<u32>,

    /// Random seed; the same seed replays the same dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the CSV files are written into
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn apply_overrides(mut cfg: GeneratorConfig, cli: &Cli) -> GeneratorConfig {
    if let Some(customers) = cli.customers {
        cfg.customer_count = customers;
    }
    if let Some(products) = cli.products {
        cfg.product_count = products;
    }
    if let Some(orders) = cli.orders {
        cfg.order_count = orders;
    }
    if let Some(max_items) = cli.max_items {
        cfg.max_items_per_order = max_items;
    }
    if let Some(views) = cli.views {
        cfg.view_count = views;
    }
    if let Some(days) = cli.lookback_days {
        cfg.lookback_window_days = days;
    }
    if let Some(seed) = cli.seed {
        cfg.random_seed = seed;
    }
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }
    cfg
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    let cfg = apply_overrides(loaded, &cli)
        .validated()
        .context("invalid generation parameters")?;

    config::init_tracing(&cfg.log_level);

    info!(
        seed = cfg.random_seed,
        customers = cfg.customer_count,
        products = cfg.product_count,
        orders = cfg.order_count,
        views = cfg.view_count,
        "starting dataset generation"
    );

    let dataset = Pipeline::new(cfg.clone())
        .run()
        .context("dataset generation failed")?;

    info!(
        customers = dataset.customers.len(),
        products = dataset.products.len(),
        transactions = dataset.transactions.len(),
        product_views = dataset.product_views.len(),
        output_dir = %cfg.output_dir.display(),
        "dataset generation complete"
    );

    Ok(())
}
