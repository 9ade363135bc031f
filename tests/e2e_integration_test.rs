//! End-to-end tests: generate at reference scale, write CSVs, read them
//! back, and verify every invariant on the emitted files.

use shopgen::config::GenerateConfig;
use shopgen::generator::Generator;
use shopgen::reader::read_dataset;
use shopgen::verify::verify_dataset;
use shopgen::writer::{write_dataset, TABLE_FILES};
use std::collections::HashSet;
use std::fs;

fn reference_config(seed: u64) -> GenerateConfig {
    GenerateConfig {
        customers: 1000,
        products: 500,
        orders: 2000,
        seed,
        ..GenerateConfig::default()
    }
}

#[test]
fn test_reference_scale_row_counts_and_id_ranges() {
    let dir = tempfile::tempdir().unwrap();
    let data = Generator::new(reference_config(42)).generate().unwrap();
    write_dataset(dir.path(), &data).unwrap();

    let loaded = read_dataset(dir.path()).unwrap();
    assert_eq!(loaded.customers.len(), 1000);
    assert_eq!(loaded.products.len(), 500);
    assert_eq!(loaded.orders.len(), 2000);

    let customer_ids: HashSet<u32> = loaded.customers.iter().map(|c| c.customer_id).collect();
    assert_eq!(customer_ids.len(), 1000);
    assert!(customer_ids.iter().all(|&id| (1..=1000).contains(&id)));

    for order in &loaded.orders {
        assert!(
            (1..=1000).contains(&order.customer_id),
            "order {} references customer {} outside 1..=1000",
            order.order_id,
            order.customer_id
        );
    }
}

#[test]
fn test_same_seed_produces_byte_identical_files() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    let data_a = Generator::new(reference_config(42)).generate().unwrap();
    let data_b = Generator::new(reference_config(42)).generate().unwrap();
    write_dataset(dir_a.path(), &data_a).unwrap();
    write_dataset(dir_b.path(), &data_b).unwrap();

    for file in TABLE_FILES {
        let a = fs::read(dir_a.path().join(file)).unwrap();
        let b = fs::read(dir_b.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between identical runs");
    }
}

#[test]
fn test_different_seeds_differ() {
    let data_a = Generator::new(reference_config(42)).generate().unwrap();
    let data_b = Generator::new(reference_config(43)).generate().unwrap();

    let names_a: Vec<&str> = data_a.customers.iter().map(|c| c.name.as_str()).collect();
    let names_b: Vec<&str> = data_b.customers.iter().map(|c| c.name.as_str()).collect();
    assert_ne!(names_a, names_b);
}

#[test]
fn test_emitted_files_pass_full_verification() {
    let dir = tempfile::tempdir().unwrap();
    let data = Generator::new(reference_config(7)).generate().unwrap();
    write_dataset(dir.path(), &data).unwrap();

    let loaded = read_dataset(dir.path()).unwrap();
    let summary = verify_dataset(&loaded);
    assert!(
        summary.passed(),
        "verification failed on emitted files: {:?}",
        summary.issues
    );
}

#[test]
fn test_cancelled_orders_never_appear_in_shipments() {
    let data = Generator::new(reference_config(42)).generate().unwrap();
    let cancelled: HashSet<u32> = data
        .orders
        .iter()
        .filter(|o| o.status == shopgen::OrderStatus::Cancelled)
        .map(|o| o.order_id)
        .collect();
    assert!(!cancelled.is_empty(), "expected some cancelled orders at this scale");

    for shipment in &data.shipments {
        assert!(
            !cancelled.contains(&shipment.order_id),
            "shipment {} references cancelled order {}",
            shipment.shipment_id,
            shipment.order_id
        );
    }
}

#[test]
fn test_dates_serialized_iso_and_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let data = Generator::new(reference_config(3)).generate().unwrap();
    write_dataset(dir.path(), &data).unwrap();

    let contents = fs::read_to_string(dir.path().join("customers.csv")).unwrap();
    for line in contents.lines().skip(1).take(50) {
        let signup = line.split(',').nth(3).unwrap();
        assert_eq!(signup.len(), 10, "date {signup} not YYYY-MM-DD");
        chrono::NaiveDate::parse_from_str(signup, "%Y-%m-%d").unwrap();
    }
}

#[test]
fn test_money_fields_have_two_decimals() {
    let dir = tempfile::tempdir().unwrap();
    let data = Generator::new(reference_config(3)).generate().unwrap();
    write_dataset(dir.path(), &data).unwrap();

    let contents = fs::read_to_string(dir.path().join("products.csv")).unwrap();
    for line in contents.lines().skip(1).take(50) {
        let price = line.split(',').nth(3).unwrap();
        let (_, frac) = price.split_once('.').expect("price missing decimal point");
        assert_eq!(frac.len(), 2, "price {price} lacks two fractional digits");
    }
}
