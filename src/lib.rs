//! commerce-datagen
//!
//! Deterministic synthesis of a relational e-commerce dataset: customers with
//! latent category preferences, a brand-constrained product catalog,
//! cart-based purchase transactions with cross-sell correlation, and
//! preference-biased product views — exported as four flat CSV tables for
//! analytics, dashboarding, or ML exercises. No real user data is involved,
//! and a fixed seed replays the exact dataset.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod catalog;
pub mod config;
pub mod errors;
pub mod export;
pub mod generators;
pub mod identity;
pub mod models;
pub mod pipeline;
pub mod sampling;

pub use config::GeneratorConfig;
pub use errors::{DataGenError, DataGenResult};
pub use pipeline::{Dataset, Pipeline};
