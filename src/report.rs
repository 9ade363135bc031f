//! Customer/product revenue aggregation.
//!
//! In-process equivalent of `sql/customer_product_analysis.sql`: joins
//! all five tables on their declared foreign keys and aggregates per
//! (customer, product) pair. Shipment costs are summed per order first,
//! then joined onto each of the order's line items, matching the SQL's
//! derived-table join semantics.

use crate::model::{Dataset, Money};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub customer_id: u32,
    pub customer_name: String,
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub number_of_orders: usize,
    pub total_quantity: u64,
    pub total_revenue: Money,
    pub total_shipment_cost: Money,
    pub first_order_date: NaiveDate,
    pub most_recent_order_date: NaiveDate,
}

struct PairAccumulator {
    orders: HashSet<u32>,
    quantity: u64,
    revenue: i64,
    shipment_cost: i64,
    first_order: NaiveDate,
    last_order: NaiveDate,
}

/// Aggregate the dataset and return the top `limit` pairs by revenue
/// descending. Revenue ties break on (customer_id, product_id) so the
/// ordering is total and the output deterministic.
pub fn top_pairs(data: &Dataset, limit: usize) -> Vec<ReportRow> {
    let shipment_cost_by_order: HashMap<u32, i64> =
        data.shipments.iter().fold(HashMap::new(), |mut acc, s| {
            *acc.entry(s.order_id).or_insert(0) += s.shipment_cost.cents();
            acc
        });
    let order_by_id: HashMap<u32, &crate::model::Order> =
        data.orders.iter().map(|o| (o.order_id, o)).collect();

    let mut pairs: HashMap<(u32, u32), PairAccumulator> = HashMap::new();
    for item in &data.order_items {
        let Some(order) = order_by_id.get(&item.order_id) else {
            continue;
        };
        let order_shipping = shipment_cost_by_order
            .get(&item.order_id)
            .copied()
            .unwrap_or(0);
        let revenue = item.item_price.cents() * item.quantity as i64;

        pairs
            .entry((order.customer_id, item.product_id))
            .and_modify(|acc| {
                acc.orders.insert(item.order_id);
                acc.quantity += item.quantity as u64;
                acc.revenue += revenue;
                acc.shipment_cost += order_shipping;
                acc.first_order = acc.first_order.min(order.order_date);
                acc.last_order = acc.last_order.max(order.order_date);
            })
            .or_insert_with(|| PairAccumulator {
                orders: HashSet::from([item.order_id]),
                quantity: item.quantity as u64,
                revenue,
                shipment_cost: order_shipping,
                first_order: order.order_date,
                last_order: order.order_date,
            });
    }

    let customer_names: HashMap<u32, &str> = data
        .customers
        .iter()
        .map(|c| (c.customer_id, c.name.as_str()))
        .collect();
    let products: HashMap<u32, (&str, &str)> = data
        .products
        .iter()
        .map(|p| (p.product_id, (p.name.as_str(), p.category.as_str())))
        .collect();

    let mut rows: Vec<ReportRow> = pairs
        .into_iter()
        .map(|((customer_id, product_id), acc)| {
            let (product_name, category) = products
                .get(&product_id)
                .copied()
                .unwrap_or(("<unknown>", "<unknown>"));
            ReportRow {
                customer_id,
                customer_name: customer_names
                    .get(&customer_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "<unknown>".to_string()),
                product_id,
                product_name: product_name.to_string(),
                category: category.to_string(),
                number_of_orders: acc.orders.len(),
                total_quantity: acc.quantity,
                total_revenue: Money(acc.revenue),
                total_shipment_cost: Money(acc.shipment_cost),
                first_order_date: acc.first_order,
                most_recent_order_date: acc.last_order,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total_revenue
            .cmp(&a.total_revenue)
            .then(a.customer_id.cmp(&b.customer_id))
            .then(a.product_id.cmp(&b.product_id))
    });
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerateConfig;
    use crate::generator::Generator;
    use crate::model::{Carrier, Customer, Order, OrderItem, OrderStatus, Product, Shipment};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// One customer, one product, two orders for it, one shipment.
    fn tiny_dataset() -> Dataset {
        Dataset {
            customers: vec![Customer {
                customer_id: 1,
                name: "Alice Smith".to_string(),
                email: "alice.smith100@example.com".to_string(),
                signup_date: date(2022, 5, 1),
                country: "Canada".to_string(),
            }],
            products: vec![Product {
                product_id: 1,
                name: "Acme Corp Lamp".to_string(),
                category: "Home & Garden".to_string(),
                price: Money(10_00),
                launch_date: date(2022, 2, 1),
            }],
            orders: vec![
                Order {
                    order_id: 1,
                    customer_id: 1,
                    order_date: date(2023, 1, 10),
                    ship_date: Some(date(2023, 1, 12)),
                    status: OrderStatus::Delivered,
                },
                Order {
                    order_id: 2,
                    customer_id: 1,
                    order_date: date(2024, 6, 1),
                    ship_date: None,
                    status: OrderStatus::Pending,
                },
            ],
            order_items: vec![
                OrderItem {
                    order_item_id: 1,
                    order_id: 1,
                    product_id: 1,
                    quantity: 2,
                    item_price: Money(9_50),
                },
                OrderItem {
                    order_item_id: 2,
                    order_id: 2,
                    product_id: 1,
                    quantity: 1,
                    item_price: Money(10_50),
                },
            ],
            shipments: vec![Shipment {
                shipment_id: 1,
                order_id: 1,
                shipment_date: date(2023, 1, 13),
                carrier: Carrier::Ups,
                tracking_number: "UP1234567890".to_string(),
                shipment_cost: Money(7_25),
            }],
        }
    }

    #[test]
    fn test_aggregation_over_known_rows() {
        let rows = top_pairs(&tiny_dataset(), 100);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.number_of_orders, 2);
        assert_eq!(row.total_quantity, 3);
        // 2 * 9.50 + 1 * 10.50
        assert_eq!(row.total_revenue, Money(29_50));
        assert_eq!(row.total_shipment_cost, Money(7_25));
        assert_eq!(row.first_order_date, date(2023, 1, 10));
        assert_eq!(row.most_recent_order_date, date(2024, 6, 1));
    }

    #[test]
    fn test_order_shipping_joined_per_line_item() {
        // Two line items of different products in the same order: the
        // order's shipment cost appears under both pairs, matching the
        // SQL join semantics.
        let mut data = tiny_dataset();
        data.products.push(Product {
            product_id: 2,
            name: "Acme Corp Vase".to_string(),
            category: "Home & Garden".to_string(),
            price: Money(20_00),
            launch_date: date(2022, 2, 1),
        });
        data.order_items.push(OrderItem {
            order_item_id: 3,
            order_id: 1,
            product_id: 2,
            quantity: 1,
            item_price: Money(19_00),
        });

        let rows = top_pairs(&data, 100);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.total_shipment_cost == Money(7_25)));
    }

    #[test]
    fn test_sorted_by_revenue_descending_and_limited() {
        let config = GenerateConfig {
            customers: 40,
            products: 25,
            orders: 100,
            ..GenerateConfig::default()
        };
        let data = Generator::new(config).generate().unwrap();
        let rows = top_pairs(&data, 10);
        assert!(rows.len() <= 10);
        for pair in rows.windows(2) {
            assert!(pair[0].total_revenue >= pair[1].total_revenue);
        }
    }
}
