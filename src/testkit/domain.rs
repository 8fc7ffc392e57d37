//! The canonical test data set.
//!
//! Three stores, three products and three managers:
//!
//! | store | location | manager |
//! |---|---|---|
//! | PP-1 | Galway | M001 |
//! | PP-2 | Athlone | M002 |
//! | PP-3 | Dublin | none |
//!
//! AA-1 is sold in PP-1 and PP-2, AA-2 in PP-1, AA-3 nowhere. M003 exists
//! but runs no store.

use rust_decimal_macros::dec;

use crate::domain::{Manager, PricingRow, Product, Store};

pub fn stores() -> Vec<Store> {
    vec![
        Store::new("PP-1", "Galway").with_manager("M001"),
        Store::new("PP-2", "Athlone").with_manager("M002"),
        Store::new("PP-3", "Dublin"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("AA-1", "Brown Bread 800g"),
        Product::new("AA-2", "Full Cream Milk 1L"),
        Product::new("AA-3", "Irish Butter 454g"),
    ]
}

pub fn pricing() -> Vec<PricingRow> {
    vec![
        PricingRow::new("AA-1", "PP-1", dec!(1.20)),
        PricingRow::new("AA-1", "PP-2", dec!(1.10)),
        PricingRow::new("AA-2", "PP-1", dec!(0.99)),
    ]
}

pub fn managers() -> Vec<Manager> {
    vec![
        Manager::new("M001", "Mary Murphy", 45_000),
        Manager::new("M002", "John Kelly", 52_000),
        Manager::new("M003", "Sean Walsh", 38_000),
    ]
}
