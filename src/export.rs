//! Flat CSV export, one file per entity table.
//!
//! Record structs flatten the in-memory models into stable column sets:
//! timestamps use a fixed second-resolution format and the favorite-category
//! list collapses into a single `;`-separated cell, so identical datasets
//! export to identical bytes.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::catalog::{Category, DeviceType, Gender};
use crate::errors::DataGenResult;
use crate::models::{Customer, Product, ProductView, Transaction};

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const PRODUCT_VIEWS_FILE: &str = "product_views.csv";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

#[derive(Serialize)]
struct CustomerRecord<'a> {
    customer_id: u32,
    name: &'a str,
    email: &'a str,
    gender: Gender,
    age: u8,
    city: &'a str,
    state: &'a str,
    registration_date: String,
    favorite_categories: String,
}

#[derive(Serialize)]
struct ProductRecord<'a> {
    product_id: u32,
    name: &'a str,
    category: Category,
    brand: &'a str,
    price: Decimal,
    created_at: String,
    is_active: bool,
}

#[derive(Serialize)]
struct TransactionRecord {
    transaction_id: u64,
    customer_id: u32,
    transaction_date: String,
    product_id: u32,
    quantity: u32,
    total_value: Decimal,
}

#[derive(Serialize)]
struct ProductViewRecord {
    view_id: u64,
    customer_id: u32,
    product_id: u32,
    view_datetime: String,
    session_id: String,
    device_type: DeviceType,
}

fn write_table<P, I, T>(path: P, rows: I) -> DataGenResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write all four tables into `output_dir`, creating it if needed.
pub fn write_customers(output_dir: &Path, customers: &[Customer]) -> DataGenResult<()> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(CUSTOMERS_FILE);
    write_table(
        &path,
        customers.iter().map(|c| CustomerRecord {
            customer_id: c.id,
            name: &c.name,
            email: &c.email,
            gender: c.gender,
            age: c.age,
            city: &c.city,
            state: &c.state,
            registration_date: format_timestamp(&c.registration_date),
            favorite_categories: join_categories(&c.favorite_categories),
        }),
    )?;
    info!(rows = customers.len(), path = %path.display(), "wrote customers table");
    Ok(())
}

pub fn write_products(output_dir: &Path, products: &[Product]) -> DataGenResult<()> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(PRODUCTS_FILE);
    write_table(
        &path,
        products.iter().map(|p| ProductRecord {
            product_id: p.id,
            name: &p.name,
            category: p.category,
            brand: &p.brand,
            price: p.price,
            created_at: format_timestamp(&p.created_at),
            is_active: p.is_active,
        }),
    )?;
    info!(rows = products.len(), path = %path.display(), "wrote products table");
    Ok(())
}

pub fn write_transactions(output_dir: &Path, transactions: &[Transaction]) -> DataGenResult<()> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(TRANSACTIONS_FILE);
    write_table(
        &path,
        transactions.iter().map(|t| TransactionRecord {
            transaction_id: t.id,
            customer_id: t.customer_id,
            transaction_date: format_timestamp(&t.transaction_date),
            product_id: t.product_id,
            quantity: t.quantity,
            total_value: t.total_value,
        }),
    )?;
    info!(rows = transactions.len(), path = %path.display(), "wrote transactions table");
    Ok(())
}

pub fn write_product_views(output_dir: &Path, views: &[ProductView]) -> DataGenResult<()> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(PRODUCT_VIEWS_FILE);
    write_table(
        &path,
        views.iter().map(|v| ProductViewRecord {
            view_id: v.id,
            customer_id: v.customer_id,
            product_id: v.product_id,
            view_datetime: format_timestamp(&v.view_datetime),
            session_id: v.session_id.to_string(),
            device_type: v.device_type,
        }),
    )?;
    info!(rows = views.len(), path = %path.display(), "wrote product views table");
    Ok(())
}
