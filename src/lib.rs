//! Deterministic synthetic e-commerce dataset generator.
//!
//! Produces five referentially-consistent CSV tables (customers,
//! products, orders, order_items, shipments) from a seeded RNG, plus a
//! verifier for the emitted files and the bundled revenue report.
//!
//! # Example
//!
//! ```rust
//! use shopgen::config::GenerateConfig;
//! use shopgen::generator::Generator;
//!
//! let config = GenerateConfig {
//!     customers: 10,
//!     products: 5,
//!     orders: 20,
//!     seed: 42,
//!     ..GenerateConfig::default()
//! };
//! let data = Generator::new(config).generate().unwrap();
//! assert_eq!(data.customers.len(), 10);
//! ```

#![allow(dead_code)]

pub mod config;
pub mod fake;
pub mod generator;
pub mod model;
pub mod reader;
pub mod report;
pub mod verify;
pub mod writer;

pub use config::GenerateConfig;
pub use generator::Generator;
pub use model::{Carrier, Customer, Dataset, Money, Order, OrderItem, OrderStatus, Product, Shipment};
