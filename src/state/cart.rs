/// The cart state machine
///
/// An ordered list of line items, unique by product name. Every mutation
/// keeps the invariant that no item is held with a quantity below 1.

use serde::{Deserialize, Serialize};

use super::data::LineItem;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item called `name`, if any
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Add one unit of a product.
    ///
    /// An existing item with the same name has its quantity bumped;
    /// otherwise a new item with quantity 1 is appended.
    pub fn add(&mut self, name: &str, unit_price: f64, image_ref: &str) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem::new(name, unit_price, image_ref)),
        }
    }

    /// Add `delta` to the quantity of the item at `index`.
    ///
    /// Returns false (and changes nothing) when `index` is out of range.
    /// An item whose quantity drops to 0 or below is removed.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };

        let quantity = i64::from(item.quantity).saturating_add(delta);
        if quantity <= 0 {
            self.items.remove(index);
        } else {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        true
    }

    /// Remove the item at `index`. Returns false when out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price × quantity
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// Sum of quantities, shown on the cart badge
    pub fn badge_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored cart, restoring the invariants whatever was on disk:
    /// items with quantity 0 are dropped, repeated names are merged into
    /// the first occurrence with their quantities summed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let stored: Vec<LineItem> = serde_json::from_str(json)?;

        let mut cart = Cart::new();
        for item in stored.into_iter().filter(|item| item.quantity > 0) {
            match cart.items.iter_mut().find(|existing| existing.name == item.name) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => cart.items.push(item),
            }
        }
        Ok(cart)
    }
}
