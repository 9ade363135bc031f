//! Dataset integrity verification.
//!
//! Re-reads an emitted dataset and checks every invariant the generator
//! promises: dense unique primary keys, foreign-key existence, date
//! ordering between related rows, status-conditioned fields, and value
//! ranges. A correct generator can never trip these; the verifier proves
//! that on real output and catches hand-edited files.

use crate::fake::CATEGORIES;
use crate::model::{Dataset, Money};
use crate::reader::read_dataset;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Stop collecting after this many issues; a corrupt file would
/// otherwise flood the report.
const MAX_ISSUES: usize = 1000;

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A single integrity violation
#[derive(Debug, Clone, Serialize)]
pub struct VerifyIssue {
    pub code: &'static str,
    pub severity: Severity,
    pub table: &'static str,
    pub message: String,
}

impl VerifyIssue {
    fn error(code: &'static str, table: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            table,
            message: message.into(),
        }
    }
}

impl fmt::Display for VerifyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] table={}: {}",
            self.severity, self.code, self.table, self.message
        )
    }
}

#[derive(Debug, Serialize)]
pub struct VerifySummary {
    pub issues: Vec<VerifyIssue>,
    pub rows_checked: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl VerifySummary {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Load the dataset from `dir` and verify it.
pub fn verify_dir(dir: &Path) -> anyhow::Result<VerifySummary> {
    let data = read_dataset(dir)?;
    Ok(verify_dataset(&data))
}

/// Run all integrity checks against an in-memory dataset.
pub fn verify_dataset(data: &Dataset) -> VerifySummary {
    let mut checker = Checker::default();

    checker.check_primary_keys(data);
    checker.check_customers(data);
    checker.check_products(data);
    checker.check_orders(data);
    checker.check_order_items(data);
    checker.check_shipments(data);

    let errors = checker
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = checker.issues.len() - errors;
    VerifySummary {
        issues: checker.issues,
        rows_checked: data.total_rows(),
        errors,
        warnings,
    }
}

#[derive(Default)]
struct Checker {
    issues: Vec<VerifyIssue>,
}

impl Checker {
    fn push(&mut self, issue: VerifyIssue) {
        if self.issues.len() < MAX_ISSUES {
            self.issues.push(issue);
        }
    }

    fn check_dense_ids(
        &mut self,
        table: &'static str,
        id_column: &str,
        ids: impl Iterator<Item = u32>,
    ) {
        let mut seen = HashSet::new();
        let mut expected = 1u32;
        for id in ids {
            if !seen.insert(id) {
                self.push(VerifyIssue::error(
                    "pk_duplicate",
                    table,
                    format!("duplicate {id_column} {id}"),
                ));
            }
            if id != expected {
                self.push(VerifyIssue::error(
                    "pk_not_dense",
                    table,
                    format!("expected {id_column} {expected}, found {id}"),
                ));
            }
            expected = id + 1;
        }
    }

    fn check_primary_keys(&mut self, data: &Dataset) {
        self.check_dense_ids(
            "customers",
            "customer_id",
            data.customers.iter().map(|c| c.customer_id),
        );
        self.check_dense_ids(
            "products",
            "product_id",
            data.products.iter().map(|p| p.product_id),
        );
        self.check_dense_ids("orders", "order_id", data.orders.iter().map(|o| o.order_id));
        self.check_dense_ids(
            "order_items",
            "order_item_id",
            data.order_items.iter().map(|i| i.order_item_id),
        );
        self.check_dense_ids(
            "shipments",
            "shipment_id",
            data.shipments.iter().map(|s| s.shipment_id),
        );
    }

    fn check_customers(&mut self, data: &Dataset) {
        for customer in &data.customers {
            if customer.email.is_empty() || !customer.email.contains('@') {
                self.push(VerifyIssue::error(
                    "bad_email",
                    "customers",
                    format!("customer {} has malformed email", customer.customer_id),
                ));
            }
        }
    }

    fn check_products(&mut self, data: &Dataset) {
        let categories: HashSet<&str> = CATEGORIES.iter().copied().collect();
        for product in &data.products {
            if !categories.contains(product.category.as_str()) {
                self.push(VerifyIssue::error(
                    "bad_category",
                    "products",
                    format!(
                        "product {} has unknown category {:?}",
                        product.product_id, product.category
                    ),
                ));
            }
            if product.price < Money(500) || product.price > Money(500_000) {
                self.push(VerifyIssue::error(
                    "price_out_of_range",
                    "products",
                    format!(
                        "product {} price {} outside [5.00, 5000.00]",
                        product.product_id, product.price
                    ),
                ));
            }
        }
    }

    fn check_orders(&mut self, data: &Dataset) {
        let signup_by_customer: HashMap<u32, chrono::NaiveDate> = data
            .customers
            .iter()
            .map(|c| (c.customer_id, c.signup_date))
            .collect();

        for order in &data.orders {
            match signup_by_customer.get(&order.customer_id) {
                None => {
                    self.push(VerifyIssue::error(
                        "fk_orphan",
                        "orders",
                        format!(
                            "order {} references missing customer {}",
                            order.order_id, order.customer_id
                        ),
                    ));
                }
                Some(&signup) => {
                    if order.order_date < signup {
                        self.push(VerifyIssue::error(
                            "order_before_signup",
                            "orders",
                            format!(
                                "order {} dated {} precedes customer signup {}",
                                order.order_id, order.order_date, signup
                            ),
                        ));
                    }
                }
            }

            match order.ship_date {
                Some(_) if !order.status.ships() => {
                    self.push(VerifyIssue::error(
                        "ship_date_unexpected",
                        "orders",
                        format!(
                            "{:?} order {} must not have a ship_date",
                            order.status, order.order_id
                        ),
                    ));
                }
                None if order.status.ships() => {
                    self.push(VerifyIssue::error(
                        "ship_date_missing",
                        "orders",
                        format!(
                            "{:?} order {} is missing its ship_date",
                            order.status, order.order_id
                        ),
                    ));
                }
                Some(ship) => {
                    let delta = (ship - order.order_date).num_days();
                    if !(1..=7).contains(&delta) {
                        self.push(VerifyIssue::error(
                            "ship_date_out_of_window",
                            "orders",
                            format!(
                                "order {} ships {delta} days after order date, expected 1-7",
                                order.order_id
                            ),
                        ));
                    }
                }
                None => {}
            }
        }
    }

    fn check_order_items(&mut self, data: &Dataset) {
        let order_ids: HashSet<u32> = data.orders.iter().map(|o| o.order_id).collect();
        let price_by_product: HashMap<u32, Money> = data
            .products
            .iter()
            .map(|p| (p.product_id, p.price))
            .collect();
        let mut orders_with_items: HashSet<u32> = HashSet::new();

        for item in &data.order_items {
            if !order_ids.contains(&item.order_id) {
                self.push(VerifyIssue::error(
                    "fk_orphan",
                    "order_items",
                    format!(
                        "order_item {} references missing order {}",
                        item.order_item_id, item.order_id
                    ),
                ));
            } else {
                orders_with_items.insert(item.order_id);
            }

            match price_by_product.get(&item.product_id) {
                None => {
                    self.push(VerifyIssue::error(
                        "fk_orphan",
                        "order_items",
                        format!(
                            "order_item {} references missing product {}",
                            item.order_item_id, item.product_id
                        ),
                    ));
                }
                Some(base) => {
                    // Half-cent tolerance for the rounding applied at
                    // generation time.
                    let price = item.item_price.cents() as f64;
                    let base_cents = base.cents() as f64;
                    if price < base_cents * 0.9 - 0.5 || price > base_cents * 1.1 + 0.5 {
                        self.push(VerifyIssue::error(
                            "item_price_out_of_band",
                            "order_items",
                            format!(
                                "order_item {} price {} outside 90-110% of product base {}",
                                item.order_item_id, item.item_price, base
                            ),
                        ));
                    }
                }
            }

            if !(1..=5).contains(&item.quantity) {
                self.push(VerifyIssue::error(
                    "quantity_out_of_range",
                    "order_items",
                    format!(
                        "order_item {} quantity {} outside [1, 5]",
                        item.order_item_id, item.quantity
                    ),
                ));
            }
        }

        for order in &data.orders {
            if !orders_with_items.contains(&order.order_id) {
                self.push(VerifyIssue::error(
                    "order_without_items",
                    "orders",
                    format!("order {} has no line items", order.order_id),
                ));
            }
        }
    }

    fn check_shipments(&mut self, data: &Dataset) {
        let orders_by_id: HashMap<u32, &crate::model::Order> =
            data.orders.iter().map(|o| (o.order_id, o)).collect();
        let mut tracking: HashSet<&str> = HashSet::new();

        for shipment in &data.shipments {
            match orders_by_id.get(&shipment.order_id) {
                None => {
                    self.push(VerifyIssue::error(
                        "fk_orphan",
                        "shipments",
                        format!(
                            "shipment {} references missing order {}",
                            shipment.shipment_id, shipment.order_id
                        ),
                    ));
                }
                Some(order) => {
                    if !order.status.ships() {
                        self.push(VerifyIssue::error(
                            "shipment_for_unshipped_order",
                            "shipments",
                            format!(
                                "shipment {} belongs to {:?} order {}",
                                shipment.shipment_id, order.status, order.order_id
                            ),
                        ));
                    }
                    if let Some(ship_date) = order.ship_date {
                        if shipment.shipment_date < ship_date {
                            self.push(VerifyIssue::error(
                                "shipment_before_ship_date",
                                "shipments",
                                format!(
                                    "shipment {} dated {} precedes order ship date {}",
                                    shipment.shipment_id, shipment.shipment_date, ship_date
                                ),
                            ));
                        }
                    }
                }
            }

            if !shipment
                .tracking_number
                .starts_with(shipment.carrier.tracking_prefix())
            {
                self.push(VerifyIssue::error(
                    "bad_tracking_number",
                    "shipments",
                    format!(
                        "shipment {} tracking number {:?} lacks the {} prefix",
                        shipment.shipment_id,
                        shipment.tracking_number,
                        shipment.carrier.tracking_prefix()
                    ),
                ));
            }
            if !tracking.insert(shipment.tracking_number.as_str()) {
                self.push(VerifyIssue::error(
                    "tracking_duplicate",
                    "shipments",
                    format!(
                        "tracking number {:?} appears more than once",
                        shipment.tracking_number
                    ),
                ));
            }
            if shipment.shipment_cost < Money(500) || shipment.shipment_cost > Money(5_000) {
                self.push(VerifyIssue::error(
                    "shipment_cost_out_of_range",
                    "shipments",
                    format!(
                        "shipment {} cost {} outside [5.00, 50.00]",
                        shipment.shipment_id, shipment.shipment_cost
                    ),
                ));
            }
        }
    }
}
