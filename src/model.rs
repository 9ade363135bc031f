//! Entity types for the generated dataset.
//!
//! One struct per output table, serde-derived so the CSV layer can emit
//! and re-read rows without per-table glue code. Field order matches the
//! CSV column order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monetary amount stored as integer cents.
///
/// Serialized as `D.CC` with exactly two fractional digits, which keeps
/// CSV output byte-stable across runs (f64 formatting would drop trailing
/// zeros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(pub i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// Scale by a factor, rounding to the nearest cent.
    pub fn scale(self, factor: f64) -> Money {
        Money((self.0 as f64 * factor).round() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        let whole: i64 = whole
            .parse()
            .map_err(|_| format!("invalid money amount: {s}"))?;
        let cents = match frac.len() {
            0 => 0,
            1 | 2 => {
                let n: i64 = frac
                    .parse()
                    .map_err(|_| format!("invalid money amount: {s}"))?;
                if frac.len() == 1 {
                    n * 10
                } else {
                    n
                }
            }
            _ => return Err(format!("too many fractional digits: {s}")),
        };
        Ok(Money(whole * 100 + cents))
    }
}

impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Order lifecycle status. Serialized with the capitalized names the
/// downstream SQL expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Whether this status carries a ship_date (and may have shipments).
    pub fn ships(self) -> bool {
        !matches!(self, OrderStatus::Pending | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Shipping carrier. The two-letter prefix seeds tracking numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "UPS")]
    Ups,
    FedEx,
    #[serde(rename = "USPS")]
    Usps,
    #[serde(rename = "DHL")]
    Dhl,
    #[serde(rename = "Amazon Logistics")]
    AmazonLogistics,
    OnTrac,
}

impl Carrier {
    pub const ALL: [Carrier; 6] = [
        Carrier::Ups,
        Carrier::FedEx,
        Carrier::Usps,
        Carrier::Dhl,
        Carrier::AmazonLogistics,
        Carrier::OnTrac,
    ];

    pub fn tracking_prefix(self) -> &'static str {
        match self {
            Carrier::Ups => "UP",
            Carrier::FedEx => "FE",
            Carrier::Usps => "US",
            Carrier::Dhl => "DH",
            Carrier::AmazonLogistics => "AM",
            Carrier::OnTrac => "ON",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: u32,
    pub name: String,
    pub email: String,
    pub signup_date: NaiveDate,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub launch_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    pub customer_id: u32,
    pub order_date: NaiveDate,
    /// None for Pending and Cancelled orders; serialized as an empty field.
    pub ship_date: Option<NaiveDate>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub item_price: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: u32,
    pub order_id: u32,
    pub shipment_date: NaiveDate,
    pub carrier: Carrier,
    pub tracking_number: String,
    pub shipment_cost: Money,
}

/// All five generated tables.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub shipments: Vec<Shipment>,
}

impl Dataset {
    pub fn total_rows(&self) -> usize {
        self.customers.len()
            + self.products.len()
            + self.orders.len()
            + self.order_items.len()
            + self.shipments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_pads_cents() {
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(1234).to_string(), "12.34");
        assert_eq!(Money::from_cents(100005).to_string(), "1000.05");
        assert_eq!(Money::from_cents(990).to_string(), "9.90");
    }

    #[test]
    fn test_money_parse_roundtrip() {
        for s in ["5.00", "12.34", "1000.05", "49.99"] {
            let m: Money = s.parse().unwrap();
            assert_eq!(m.to_string(), s);
        }
    }

    #[test]
    fn test_money_parse_short_fraction() {
        assert_eq!("5".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!("5.5".parse::<Money>().unwrap(), Money::from_cents(550));
        assert!("5.123".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_scale_rounds_to_cent() {
        let base = Money::from_cents(1000);
        assert_eq!(base.scale(1.1), Money::from_cents(1100));
        assert_eq!(base.scale(0.9), Money::from_cents(900));
        assert_eq!(base.scale(0.9555), Money::from_cents(956));
    }

    #[test]
    fn test_status_ships() {
        assert!(!OrderStatus::Pending.ships());
        assert!(!OrderStatus::Cancelled.ships());
        assert!(OrderStatus::Processing.ships());
        assert!(OrderStatus::Shipped.ships());
        assert!(OrderStatus::Delivered.ships());
    }

    #[test]
    fn test_carrier_prefixes_are_distinct() {
        let mut prefixes: Vec<&str> = Carrier::ALL.iter().map(|c| c.tracking_prefix()).collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), Carrier::ALL.len());
    }
}
