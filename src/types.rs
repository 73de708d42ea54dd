//! Common types and data structures

use serde::Serialize;

/// One catalog record describing a purchasable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub ingredients: &'static str,
    pub price: u32, // whole currency units, not validated
    pub photo_name: &'static str,
    pub sold_out: bool,
}
