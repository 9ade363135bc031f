//! CSV emission for the five dataset tables.
//!
//! One file per table, explicit header row (written even when a table is
//! empty), `\n` line endings. Output is byte-stable for a fixed dataset.

use crate::model::Dataset;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const ORDER_ITEMS_FILE: &str = "order_items.csv";
pub const SHIPMENTS_FILE: &str = "shipments.csv";

/// All table file names in dependency order.
pub const TABLE_FILES: [&str; 5] = [
    CUSTOMERS_FILE,
    PRODUCTS_FILE,
    ORDERS_FILE,
    ORDER_ITEMS_FILE,
    SHIPMENTS_FILE,
];

pub const CUSTOMER_COLUMNS: [&str; 5] = ["customer_id", "name", "email", "signup_date", "country"];
pub const PRODUCT_COLUMNS: [&str; 5] = ["product_id", "name", "category", "price", "launch_date"];
pub const ORDER_COLUMNS: [&str; 5] = [
    "order_id",
    "customer_id",
    "order_date",
    "ship_date",
    "status",
];
pub const ORDER_ITEM_COLUMNS: [&str; 5] = [
    "order_item_id",
    "order_id",
    "product_id",
    "quantity",
    "item_price",
];
pub const SHIPMENT_COLUMNS: [&str; 6] = [
    "shipment_id",
    "order_id",
    "shipment_date",
    "carrier",
    "tracking_number",
    "shipment_cost",
];

/// Write all five tables into `dir`, creating it if needed.
pub fn write_dataset(dir: &Path, data: &Dataset) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    write_table(dir, CUSTOMERS_FILE, &CUSTOMER_COLUMNS, &data.customers)?;
    write_table(dir, PRODUCTS_FILE, &PRODUCT_COLUMNS, &data.products)?;
    write_table(dir, ORDERS_FILE, &ORDER_COLUMNS, &data.orders)?;
    write_table(dir, ORDER_ITEMS_FILE, &ORDER_ITEM_COLUMNS, &data.order_items)?;
    write_table(dir, SHIPMENTS_FILE, &SHIPMENT_COLUMNS, &data.shipments)?;
    Ok(())
}

fn write_table<T: Serialize>(
    dir: &Path,
    file: &str,
    columns: &[&str],
    rows: &[T],
) -> anyhow::Result<()> {
    let path = dir.join(file);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer
        .write_record(columns)
        .with_context(|| format!("failed to write header to {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Order, OrderStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_ship_date_serializes_as_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let data = Dataset {
            orders: vec![Order {
                order_id: 1,
                customer_id: 1,
                order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                ship_date: None,
                status: OrderStatus::Pending,
            }],
            ..Dataset::default()
        };
        write_dataset(dir.path(), &data).unwrap();

        let contents = fs::read_to_string(dir.path().join(ORDERS_FILE)).unwrap();
        assert_eq!(
            contents,
            "order_id,customer_id,order_date,ship_date,status\n1,1,2024-03-01,,Pending\n"
        );
    }

    #[test]
    fn test_header_written_even_for_empty_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), &Dataset::default()).unwrap();

        let contents = fs::read_to_string(dir.path().join(SHIPMENTS_FILE)).unwrap();
        assert_eq!(contents, SHIPMENT_COLUMNS.join(",") + "\n");
    }
}
