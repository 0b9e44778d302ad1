//! # Identity & Attribute Pools
//!
//! Fixed, ordered lookup tables that every generator samples from. Pools are
//! plain static slices: lookups are either cycled by index (customers) or
//! drawn at random (orders, payments), but the tables themselves carry no
//! state. City and state form one atomic pair and are never sampled
//! independently of each other.

use chrono::NaiveDate;

/// Order IDs start above this base so the three ID spaces never overlap
/// visually in loaded data.
pub const ORDER_ID_BASE: u32 = 5000;

/// Payment IDs start above this base.
pub const PAYMENT_ID_BASE: u32 = 9000;

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Irene", "Jack", "Karen",
    "Liam", "Mia", "Noah", "Olivia", "Paul", "Quinn", "Riley", "Sophia", "Thomas", "Uma", "Victor",
    "Willow", "Xavier", "Yara", "Zane",
];

pub const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Davis", "Lee", "Wilson", "Garcia", "Kim", "Brown", "Patel", "Nguyen",
    "Lopez", "Martin", "Clark", "Walker", "Hall", "Young", "Allen", "Scott", "Turner", "Baker",
];

/// Real city/state pairings. Drawn as a unit — a customer never gets a city
/// from one row and a state from another.
pub const CITY_STATES: &[(&str, &str)] = &[
    ("Seattle", "WA"),
    ("Portland", "OR"),
    ("San Francisco", "CA"),
    ("Los Angeles", "CA"),
    ("San Diego", "CA"),
    ("Sacramento", "CA"),
    ("Denver", "CO"),
    ("Austin", "TX"),
    ("Dallas", "TX"),
    ("Houston", "TX"),
    ("Chicago", "IL"),
    ("Columbus", "OH"),
    ("Detroit", "MI"),
    ("Miami", "FL"),
    ("Orlando", "FL"),
    ("Atlanta", "GA"),
    ("Raleigh", "NC"),
    ("Charlotte", "NC"),
    ("Nashville", "TN"),
    ("New York", "NY"),
];

/// A product catalog entry: name, category, list price.
pub const PRODUCT_CATALOG: &[(&str, &str, f64)] = &[
    ("Laptop 15\"", "Computers", 999.99),
    ("Smartphone X", "Mobile", 699.99),
    ("Noise-Canceling Headphones", "Audio", 129.99),
    ("Smartwatch Pro", "Wearables", 199.99),
    ("Gaming Console", "Entertainment", 399.99),
    ("Tablet 10\"", "Mobile", 329.99),
    ("Bluetooth Speaker", "Audio", 89.99),
    ("External SSD 1TB", "Storage", 149.99),
    ("27\" 4K Monitor", "Computers", 249.99),
    ("Mechanical Keyboard", "Peripherals", 59.99),
    ("Wireless Mouse", "Peripherals", 39.99),
    ("HD Webcam", "Peripherals", 79.99),
    ("All-in-One Printer", "Peripherals", 199.99),
    ("Wi-Fi 6 Router", "Networking", 129.99),
    ("Camera Drone", "Electronics", 499.99),
    ("VR Headset", "Electronics", 299.99),
    ("Smart Home Hub", "Home", 149.99),
    ("Fitness Tracker", "Wearables", 99.99),
    ("Portable Charger 20k", "Accessories", 49.99),
    ("E-reader", "Electronics", 119.99),
];

/// Inclusive range for random stock quantities.
pub const STOCK_RANGE: (u32, u32) = (80, 500);

/// Email domain appended to every derived customer address.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Inclusive customer signup window.
pub fn signup_window() -> (NaiveDate, NaiveDate) {
    (ymd(2023, 11, 1), ymd(2024, 9, 30))
}

/// Inclusive order date window. Deliberately later than the signup window;
/// no cross-window validation is performed.
pub fn order_window() -> (NaiveDate, NaiveDate) {
    (ymd(2024, 1, 1), ymd(2024, 10, 31))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // All callers pass literal calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
