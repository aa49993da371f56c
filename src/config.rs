use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use validator::Validate;

use crate::errors::DataGenResult;

/// Default values for configuration
const DEFAULT_CUSTOMER_COUNT: u32 = 1000;
const DEFAULT_PRODUCT_COUNT: u32 = 300;
const DEFAULT_ORDER_COUNT: u32 = 12_000;
const DEFAULT_MAX_ITEMS_PER_ORDER: u32 = 5;
const DEFAULT_VIEW_COUNT: u32 = 70_000;
const DEFAULT_LOOKBACK_WINDOW_DAYS: u32 = 365;
const DEFAULT_RANDOM_SEED: u64 = 42;
const DEFAULT_OUTPUT_DIR: &str = "./data";
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_FILE: &str = "config/generator";
const ENV_PREFIX: &str = "DATAGEN";

/// Generation parameters. Loaded from defaults, an optional TOML file, and
/// `DATAGEN_*` environment variables, in that precedence order.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Customers to generate (the population sampled for orders and views).
    #[serde(default = "default_customer_count")]
    #[validate(range(min = 1, message = "customer_count must be positive"))]
    pub customer_count: u32,

    /// Products in the catalog.
    #[serde(default = "default_product_count")]
    #[validate(range(min = 1, message = "product_count must be positive"))]
    pub product_count: u32,

    /// Orders to generate; each order emits one transaction per cart item.
    #[serde(default = "default_order_count")]
    pub order_count: u32,

    /// Upper bound on cart size (1..=5).
    #[serde(default = "default_max_items_per_order")]
    #[validate(range(min = 1, max = 5, message = "max_items_per_order must be in 1..=5"))]
    pub max_items_per_order: u32,

    /// Product-view events to generate.
    #[serde(default = "default_view_count")]
    pub view_count: u32,

    /// Size of the date window (ending at the reference time) that order and
    /// view timestamps fall into. Registrations span twice this window.
    #[serde(default = "default_lookback_window_days")]
    #[validate(range(min = 1, message = "lookback_window_days must be positive"))]
    pub lookback_window_days: u32,

    /// Seed for the single RNG driving every sampling decision.
    #[serde(default = "default_random_seed")]
    pub random_seed: u64,

    /// Directory the four CSV tables are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_customer_count() -> u32 {
    DEFAULT_CUSTOMER_COUNT
}
fn default_product_count() -> u32 {
    DEFAULT_PRODUCT_COUNT
}
fn default_order_count() -> u32 {
    DEFAULT_ORDER_COUNT
}
fn default_max_items_per_order() -> u32 {
    DEFAULT_MAX_ITEMS_PER_ORDER
}
fn default_view_count() -> u32 {
    DEFAULT_VIEW_COUNT
}
fn default_lookback_window_days() -> u32 {
    DEFAULT_LOOKBACK_WINDOW_DAYS
}
fn default_random_seed() -> u64 {
    DEFAULT_RANDOM_SEED
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            product_count: DEFAULT_PRODUCT_COUNT,
            order_count: DEFAULT_ORDER_COUNT,
            max_items_per_order: DEFAULT_MAX_ITEMS_PER_ORDER,
            view_count: DEFAULT_VIEW_COUNT,
            lookback_window_days: DEFAULT_LOOKBACK_WINDOW_DAYS,
            random_seed: DEFAULT_RANDOM_SEED,
            output_dir: default_output_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate invariants, returning [`crate::errors::DataGenError::Configuration`]
    /// on the first violation.
    pub fn validated(self) -> DataGenResult<Self> {
        Validate::validate(&self)?;
        Ok(self)
    }
}

/// Load configuration from the default file location and environment.
pub fn load_config() -> DataGenResult<GeneratorConfig> {
    load_config_from(CONFIG_FILE)
}

/// Load configuration with an explicit (optional) file stem.
pub fn load_config_from(file: &str) -> DataGenResult<GeneratorConfig> {
    let cfg: GeneratorConfig = Config::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()?;
    cfg.validated()
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured
/// level when set.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
