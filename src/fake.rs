//! Fake data generation helpers.
//!
//! Deterministic synthetic names, emails, brands, dates and amounts.
//! Everything routes through a single caller-supplied [`Rng`], so a fixed
//! seed reproduces the exact same value stream.

use crate::model::Money;
use chrono::{Days, NaiveDate};
use rand::Rng;

/// First names for fake data
const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Leo", "Maya", "Noah", "Olivia", "Peter", "Quinn", "Rose", "Sam", "Tara", "Uma", "Victor",
    "Wendy", "Xavier", "Yara", "Zack", "Anna", "Brian", "Clara", "Derek",
];

/// Last names for fake data
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
    "Harris", "Clark", "Lewis", "Robinson", "Walker", "Hall", "Young", "King", "Wright", "Hill",
];

/// Brand name parts for product names
const BRAND_PREFIXES: &[&str] = &[
    "Acme", "Global", "Tech", "Prime", "Nova", "Alpha", "Beta", "Delta", "Omega", "Apex", "Peak",
    "Summit", "Core", "Edge", "Wave", "Flow", "Spark", "Swift", "Bright", "Clear",
];

const BRAND_SUFFIXES: &[&str] = &[
    "Corp", "Inc", "LLC", "Systems", "Solutions", "Labs", "Group", "Industries", "Dynamics",
    "Works", "Hub", "Co",
];

/// Email domains
const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "mail.example.com",
    "fastmail.example.net",
    "webmail.example.org",
    "inbox.example.io",
];

/// Customer countries
pub const COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Italy",
    "Spain",
    "Netherlands",
    "Sweden",
    "Norway",
    "Japan",
    "South Korea",
    "Brazil",
    "Mexico",
    "India",
    "China",
    "Singapore",
    "United Arab Emirates",
];

/// The fixed product category set
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Apparel",
    "Home & Garden",
    "Sports & Outdoors",
    "Books",
    "Toys & Games",
    "Health & Beauty",
    "Automotive",
    "Food & Beverages",
    "Office Supplies",
];

/// Product name templates, indexed parallel to [`CATEGORIES`]
const PRODUCT_TEMPLATES: &[&[&str]] = &[
    &[
        "Smartphone",
        "Laptop",
        "Tablet",
        "Headphones",
        "Speaker",
        "Smartwatch",
        "Camera",
        "TV",
        "Monitor",
        "Keyboard",
        "Mouse",
    ],
    &[
        "T-Shirt",
        "Jeans",
        "Dress",
        "Jacket",
        "Sneakers",
        "Boots",
        "Hat",
        "Sunglasses",
        "Belt",
        "Wallet",
    ],
    &[
        "Lamp",
        "Chair",
        "Table",
        "Rug",
        "Curtains",
        "Vase",
        "Plant Pot",
        "Candle",
        "Picture Frame",
        "Wall Clock",
    ],
    &[
        "Tent",
        "Backpack",
        "Bicycle",
        "Dumbbells",
        "Yoga Mat",
        "Running Shoes",
        "Golf Clubs",
        "Tennis Racket",
        "Basketball",
        "Soccer Ball",
    ],
    &[
        "Novel",
        "Biography",
        "Cookbook",
        "Textbook",
        "Comic Book",
        "Guide",
        "Atlas",
        "Dictionary",
        "Encyclopedia",
        "Manual",
    ],
    &[
        "Board Game",
        "Action Figure",
        "Puzzle",
        "Doll",
        "Building Set",
        "RC Car",
        "Video Game",
        "Card Game",
        "Stuffed Animal",
        "Building Blocks",
    ],
    &[
        "Shampoo",
        "Lotion",
        "Perfume",
        "Makeup Set",
        "Vitamins",
        "Skincare Cream",
        "Hairbrush",
        "Toothbrush",
        "Deodorant",
        "Face Mask",
    ],
    &[
        "Car Battery",
        "Tire",
        "Oil Filter",
        "Brake Pad",
        "Car Mat",
        "Phone Mount",
        "Dash Cam",
        "Jump Starter",
        "Air Freshener",
        "Cleaning Kit",
    ],
    &[
        "Coffee Beans",
        "Tea",
        "Chocolate",
        "Snack Mix",
        "Protein Bar",
        "Energy Drink",
        "Cereal",
        "Pasta",
        "Sauce",
        "Spice Set",
    ],
    &[
        "Pen Set",
        "Notebook",
        "Stapler",
        "Paper Clips",
        "Folder",
        "Binder",
        "Calculator",
        "Desk Organizer",
        "Printer Paper",
        "Whiteboard",
    ],
];

/// Fake data generator with deterministic RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn first_name(&mut self) -> &'static str {
        FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())]
    }

    pub fn last_name(&mut self) -> &'static str {
        LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())]
    }

    /// Email in the `first.last###@domain` shape
    pub fn email(&mut self, first: &str, last: &str) -> String {
        let num: u32 = self.rng.gen_range(100..1000);
        let domain = EMAIL_DOMAINS[self.rng.gen_range(0..EMAIL_DOMAINS.len())];
        format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            num,
            domain
        )
    }

    pub fn country(&mut self) -> &'static str {
        COUNTRIES[self.rng.gen_range(0..COUNTRIES.len())]
    }

    /// Category index into [`CATEGORIES`]
    pub fn category_index(&mut self) -> usize {
        self.rng.gen_range(0..CATEGORIES.len())
    }

    /// Product name: brand + category-appropriate template
    pub fn product_name(&mut self, category_index: usize) -> String {
        let prefix = BRAND_PREFIXES[self.rng.gen_range(0..BRAND_PREFIXES.len())];
        let suffix = BRAND_SUFFIXES[self.rng.gen_range(0..BRAND_SUFFIXES.len())];
        let templates = PRODUCT_TEMPLATES[category_index];
        let template = templates[self.rng.gen_range(0..templates.len())];
        format!("{} {} {}", prefix, suffix, template)
    }

    /// Uniform date in the inclusive range. A single-day range collapses
    /// to that day.
    pub fn date_between(&mut self, min: NaiveDate, max: NaiveDate) -> NaiveDate {
        debug_assert!(min <= max);
        let span = (max - min).num_days() as u64;
        min + Days::new(self.rng.gen_range(0..=span))
    }

    /// Uniform amount in the inclusive cent range
    pub fn money_between(&mut self, min: Money, max: Money) -> Money {
        Money::from_cents(self.rng.gen_range(min.cents()..=max.cents()))
    }

    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    /// Uniform f64 in [min, max)
    pub fn float_range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }

    pub fn bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Draw an index from a weighted categorical distribution
    pub fn weighted_index(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        debug_assert!(total > 0);
        let mut roll = self.rng.gen_range(0..total);
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }

    /// Ten random digits, for tracking numbers
    pub fn digits10(&mut self) -> String {
        let n: u64 = self.rng.gen_range(1_000_000_000..10_000_000_000);
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fake(seed: u64) -> FakeData<ChaCha8Rng> {
        FakeData::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_deterministic_generation() {
        let mut fake1 = fake(42);
        let mut fake2 = fake(42);

        assert_eq!(fake1.first_name(), fake2.first_name());
        assert_eq!(fake1.product_name(0), fake2.product_name(0));
        assert_eq!(
            fake1.money_between(Money(500), Money(500_000)),
            fake2.money_between(Money(500), Money(500_000))
        );
    }

    #[test]
    fn test_email_shape() {
        let mut f = fake(42);
        let email = f.email("John", "Doe");
        assert!(email.starts_with("john.doe"));
        assert!(email.contains('@'));
    }

    #[test]
    fn test_date_between_single_day_range() {
        let mut f = fake(7);
        let day = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        for _ in 0..20 {
            assert_eq!(f.date_between(day, day), day);
        }
    }

    #[test]
    fn test_date_between_stays_in_range() {
        let mut f = fake(7);
        let min = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let max = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        for _ in 0..200 {
            let d = f.date_between(min, max);
            assert!(d >= min && d <= max);
        }
    }

    #[test]
    fn test_weighted_index_respects_zero_weights() {
        let mut f = fake(9);
        for _ in 0..100 {
            let i = f.weighted_index(&[0, 5, 0, 5, 0]);
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn test_templates_cover_all_categories() {
        assert_eq!(PRODUCT_TEMPLATES.len(), CATEGORIES.len());
    }

    #[test]
    fn test_digits10_has_ten_digits() {
        let mut f = fake(3);
        for _ in 0..50 {
            assert_eq!(f.digits10().len(), 10);
        }
    }
}
