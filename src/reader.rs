//! Loads a previously emitted dataset back from CSV files.
//!
//! Used by the verify and report commands; parse failures carry the file
//! name so a hand-edited CSV points at itself.

use crate::model::{Customer, Dataset, Order, OrderItem, Product, Shipment};
use crate::writer::{CUSTOMERS_FILE, ORDERS_FILE, ORDER_ITEMS_FILE, PRODUCTS_FILE, SHIPMENTS_FILE};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read all five tables from `dir`.
pub fn read_dataset(dir: &Path) -> anyhow::Result<Dataset> {
    Ok(Dataset {
        customers: read_table::<Customer>(dir, CUSTOMERS_FILE)?,
        products: read_table::<Product>(dir, PRODUCTS_FILE)?,
        orders: read_table::<Order>(dir, ORDERS_FILE)?,
        order_items: read_table::<OrderItem>(dir, ORDER_ITEMS_FILE)?,
        shipments: read_table::<Shipment>(dir, SHIPMENTS_FILE)?,
    })
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(file);
    let mut reader =
        csv::Reader::from_path(&path).with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row: T =
            result.with_context(|| format!("{}: bad record at row {}", path.display(), i + 2))?;
        rows.push(row);
    }
    Ok(rows)
}
