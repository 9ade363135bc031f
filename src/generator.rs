//! The five-stage dataset generator.
//!
//! Stages run in leaf-first dependency order: customers and products are
//! independent, orders reference customers, order items reference orders
//! and products, shipments reference orders. Each stage takes the prior
//! collections by reference and returns a fresh one, so referential
//! integrity holds by construction.

use crate::config::GenerateConfig;
use crate::fake::{FakeData, CATEGORIES};
use crate::model::{
    Carrier, Customer, Dataset, Money, Order, OrderItem, OrderStatus, Product, Shipment,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Weighted status distribution: most orders are somewhere in the
/// shipping pipeline, a tail is pending or cancelled.
const STATUS_WEIGHTS: [u32; 5] = [10, 15, 30, 35, 10];

/// Line items per order: 1..=5 with a mean around two.
const ITEM_COUNT_WEIGHTS: [u32; 5] = [35, 35, 15, 10, 5];

/// Chance of a second partial shipment for Shipped/Delivered orders.
const SECOND_SHIPMENT_P: f64 = 0.10;

/// Chance a Processing order has already produced a shipment.
const PROCESSING_SHIPMENT_P: f64 = 0.20;

const PRICE_MIN: Money = Money(500);
const PRICE_MAX: Money = Money(500_000);
const SHIPMENT_COST_MIN: Money = Money(500);
const SHIPMENT_COST_MAX: Money = Money(5_000);

/// Stateful generation context: one seeded RNG threaded through every
/// stage, so a config + seed pair fully determines the output.
pub struct Generator {
    config: GenerateConfig,
    fake: FakeData<ChaCha8Rng>,
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            fake: FakeData::new(rng),
        }
    }

    /// Run all five stages and return the complete dataset.
    pub fn generate(&mut self) -> anyhow::Result<Dataset> {
        self.config.validate()?;

        let customers = self.customers();
        let products = self.products();
        let orders = self.orders(&customers);
        let order_items = self.order_items(&orders, &products);
        let shipments = self.shipments(&orders);

        Ok(Dataset {
            customers,
            products,
            orders,
            order_items,
            shipments,
        })
    }

    /// Stage 1: independent customer rows, ids dense from 1.
    pub fn customers(&mut self) -> Vec<Customer> {
        (1..=self.config.customers as u32)
            .map(|id| {
                let first = self.fake.first_name();
                let last = self.fake.last_name();
                let email = self.fake.email(first, last);
                Customer {
                    customer_id: id,
                    name: format!("{} {}", first, last),
                    email,
                    signup_date: self
                        .fake
                        .date_between(self.config.signup_min, self.config.signup_max),
                    country: self.fake.country().to_string(),
                }
            })
            .collect()
    }

    /// Stage 2: independent product rows, ids dense from 1.
    pub fn products(&mut self) -> Vec<Product> {
        (1..=self.config.products as u32)
            .map(|id| {
                let cat = self.fake.category_index();
                Product {
                    product_id: id,
                    name: self.fake.product_name(cat),
                    category: CATEGORIES[cat].to_string(),
                    price: self.fake.money_between(PRICE_MIN, PRICE_MAX),
                    launch_date: self
                        .fake
                        .date_between(self.config.launch_min, self.config.launch_max),
                }
            })
            .collect()
    }

    /// Stage 3: orders referencing existing customers.
    ///
    /// The order date is drawn from [signup_date, order_max_date]. When a
    /// customer signed up on the last allowed day, the interval collapses
    /// to that single day; the customer is never skipped.
    pub fn orders(&mut self, customers: &[Customer]) -> Vec<Order> {
        (1..=self.config.orders as u32)
            .map(|id| {
                let customer = self.fake.pick(customers);
                let order_date = self
                    .fake
                    .date_between(customer.signup_date, self.config.order_max_date);
                let status = OrderStatus::ALL[self.fake.weighted_index(&STATUS_WEIGHTS)];
                let ship_date = if status.ships() {
                    Some(order_date + chrono::Days::new(self.fake.int_range(1, 7) as u64))
                } else {
                    None
                };
                Order {
                    order_id: id,
                    customer_id: customer.customer_id,
                    order_date,
                    ship_date,
                    status,
                }
            })
            .collect()
    }

    /// Stage 4: one to five line items per order, ids dense across the
    /// whole collection. Item price floats within ±10% of the product's
    /// base price (discounts and markups), rounded to cents.
    pub fn order_items(&mut self, orders: &[Order], products: &[Product]) -> Vec<OrderItem> {
        let mut items = Vec::with_capacity(orders.len() * 2);
        let mut next_id = 1u32;

        for order in orders {
            let count = self.fake.weighted_index(&ITEM_COUNT_WEIGHTS) + 1;
            for _ in 0..count {
                let product = self.fake.pick(products);
                let factor = self.fake.float_range(0.9, 1.1);
                items.push(OrderItem {
                    order_item_id: next_id,
                    order_id: order.order_id,
                    product_id: product.product_id,
                    quantity: self.fake.int_range(1, 5),
                    item_price: product.price.scale(factor),
                });
                next_id += 1;
            }
        }
        items
    }

    /// Stage 5: shipments conditioned on order status.
    ///
    /// Only orders with a ship_date can ship, which the status policy
    /// guarantees: Shipped/Delivered always get one shipment (sometimes a
    /// second partial one), Processing occasionally, Pending/Cancelled
    /// never. Shipment dates land on or after the order's ship_date.
    pub fn shipments(&mut self, orders: &[Order]) -> Vec<Shipment> {
        let mut shipments = Vec::new();
        let mut tracking_numbers: HashSet<String> = HashSet::new();
        let mut next_id = 1u32;

        for order in orders {
            let count = match order.status {
                OrderStatus::Shipped | OrderStatus::Delivered => {
                    if self.fake.bool_with_probability(SECOND_SHIPMENT_P) {
                        2
                    } else {
                        1
                    }
                }
                OrderStatus::Processing => {
                    usize::from(self.fake.bool_with_probability(PROCESSING_SHIPMENT_P))
                }
                OrderStatus::Pending | OrderStatus::Cancelled => 0,
            };
            if count == 0 {
                continue;
            }

            // Statuses that ship always carry a ship_date; the fallback to
            // order_date can only trigger on hand-built inputs.
            let min_date = order.ship_date.unwrap_or(order.order_date);
            let max_date = min_date.max(self.config.order_max_date);

            for _ in 0..count {
                let carrier = *self.fake.pick(&Carrier::ALL);
                let tracking_number = self.unique_tracking_number(carrier, &mut tracking_numbers);
                shipments.push(Shipment {
                    shipment_id: next_id,
                    order_id: order.order_id,
                    shipment_date: self.fake.date_between(min_date, max_date),
                    carrier,
                    tracking_number,
                    shipment_cost: self
                        .fake
                        .money_between(SHIPMENT_COST_MIN, SHIPMENT_COST_MAX),
                });
                next_id += 1;
            }
        }
        shipments
    }

    fn unique_tracking_number(&mut self, carrier: Carrier, seen: &mut HashSet<String>) -> String {
        loop {
            let candidate = format!("{}{}", carrier.tracking_prefix(), self.fake.digits10());
            if seen.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
