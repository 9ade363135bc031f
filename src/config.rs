//! Generation configuration and fail-fast validation.

use anyhow::bail;
use chrono::NaiveDate;

/// Date window constants matching the reference dataset.
pub const SIGNUP_MIN: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(d) => d,
    None => panic!("invalid signup min date"),
};
pub const SIGNUP_MAX: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 31) {
    Some(d) => d,
    None => panic!("invalid signup max date"),
};
pub const LAUNCH_MAX: NaiveDate = match NaiveDate::from_ymd_opt(2025, 9, 1) {
    Some(d) => d,
    None => panic!("invalid launch max date"),
};

/// Knobs for a generation run.
///
/// Order dates share the signup window's upper bound: no customer signs
/// up after `order_max_date`, so the per-customer order-date sampling
/// interval is never empty (at worst it collapses to a single day).
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub seed: u64,
    pub signup_min: NaiveDate,
    pub signup_max: NaiveDate,
    pub launch_min: NaiveDate,
    pub launch_max: NaiveDate,
    pub order_max_date: NaiveDate,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            customers: 1000,
            products: 500,
            orders: 2000,
            seed: 42,
            signup_min: SIGNUP_MIN,
            signup_max: SIGNUP_MAX,
            launch_min: SIGNUP_MIN,
            launch_max: LAUNCH_MAX,
            order_max_date: SIGNUP_MAX,
        }
    }
}

impl GenerateConfig {
    /// Reject impossible configurations before any rows are generated.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.customers == 0 {
            bail!("customer count must be at least 1");
        }
        if self.products == 0 {
            bail!("product count must be at least 1");
        }
        if self.orders == 0 {
            bail!("order count must be at least 1");
        }
        if self.signup_min > self.signup_max {
            bail!(
                "signup date range is inverted: {} > {}",
                self.signup_min,
                self.signup_max
            );
        }
        if self.launch_min > self.launch_max {
            bail!(
                "launch date range is inverted: {} > {}",
                self.launch_min,
                self.launch_max
            );
        }
        if self.order_max_date < self.signup_max {
            bail!(
                "order max date {} is earlier than the latest possible signup {}",
                self.order_max_date,
                self.signup_max
            );
        }
        Ok(())
    }
}
