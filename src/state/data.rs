/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store, the cart controller and the UI layer.

use serde::{Deserialize, Serialize};

/// One product entry in the cart with its quantity
///
/// Serialized as `{ "name", "price", "image", "quantity" }`, the layout
/// the persisted cart has always used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Product name, unique within a cart
    pub name: String,
    /// Unit price (non-negative)
    #[serde(rename = "price")]
    pub unit_price: f64,
    /// Path to the product picture
    #[serde(rename = "image")]
    pub image_ref: String,
    /// Always >= 1 while the item is in a cart
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1
    pub fn new(name: impl Into<String>, unit_price: f64, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity: 1,
        }
    }

    /// unit price × quantity
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A product offered on the menu
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    pub fn new(name: &str, price: f64, image: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// A titled group of products (one accordion section on the menu page)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub title: String,
    pub products: Vec<Product>,
}

/// Format a monetary amount: currency symbol followed by 2 decimals
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal() {
        let mut item = LineItem::new("Mango", 50.0, "assets/mango.png");
        item.quantity = 3;
        assert_eq!(item.subtotal(), 150.0);
    }

    #[test]
    fn test_persisted_field_names() {
        let item = LineItem::new("Orange", 40.0, "assets/orange.png");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Orange","price":40.0,"image":"assets/orange.png","quantity":1}"#
        );
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("₹", 0.0), "₹0.00");
        assert_eq!(format_money("₹", 49.5), "₹49.50");
        assert_eq!(format_money("$", 1234.567), "$1234.57");
    }
}
