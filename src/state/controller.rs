/// The cart controller
///
/// Owns the cart, the profile store it is mirrored into and the view it
/// is rendered through. Every mutation goes store first, then view.

use chrono::Local;

use super::cart::Cart;
use super::checkout::{CheckoutError, CheckoutForm, Order};
use super::data::format_money;
use super::session::{self, CART_KEY};
use super::store::Persistence;

/// Presentation port driven by the controller
pub trait CartView {
    /// Redraw everything derived from the cart (badge, list, total)
    fn render(&mut self, cart: &Cart);
    /// Show a transient notification
    fn notify(&mut self, message: String);
    /// Show a blocking message the user has to acknowledge
    fn alert(&mut self, message: String);
    /// Show the order confirmation overlay
    fn confirm_order(&mut self, order: &Order);
    /// Empty the checkout form
    fn reset_form(&mut self);
}

pub struct CartController<S: Persistence, V: CartView> {
    cart: Cart,
    store: S,
    view: V,
    currency: String,
}

impl<S: Persistence, V: CartView> CartController<S, V> {
    /// Create a controller with an empty cart. Call `page_load` before use.
    pub fn new(store: S, view: V, currency: impl Into<String>) -> Self {
        Self {
            cart: Cart::new(),
            store,
            view,
            currency: currency.into(),
        }
    }

    /// Page load: reset once per session, rehydrate from the store, render.
    pub fn page_load(&mut self, session_store: &mut impl Persistence) {
        if let Err(e) = session::reset_once(session_store, &mut self.store) {
            tracing::warn!("⚠️  Session reset failed: {}", e);
        }
        self.cart = self.load_persisted();
        self.view.render(&self.cart);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add one unit of a product and announce it
    pub fn add(&mut self, name: &str, unit_price: f64, image_ref: &str) {
        self.cart.add(name, unit_price, image_ref);
        tracing::debug!("➕ {} added, {} items in cart", name, self.cart.badge_count());

        self.save();
        self.view.render(&self.cart);
        self.view.notify(format!(
            "{} added • {}",
            name,
            format_money(&self.currency, unit_price)
        ));
    }

    /// Change the quantity at `index`; a missing index is ignored
    pub fn change_quantity(&mut self, index: usize, delta: i64) {
        if !self.cart.change_quantity(index, delta) {
            return;
        }
        self.save();
        self.view.render(&self.cart);
    }

    /// Same as `change_quantity`, addressing the item by name
    pub fn change_quantity_of(&mut self, name: &str, delta: i64) {
        if let Some(index) = self.cart.position(name) {
            self.change_quantity(index, delta);
        }
    }

    /// Remove the item at `index`; a missing index is ignored
    pub fn remove(&mut self, index: usize) {
        if !self.cart.remove(index) {
            return;
        }
        self.save();
        self.view.render(&self.cart);
    }

    /// Same as `remove`, addressing the item by name
    pub fn remove_named(&mut self, name: &str) {
        if let Some(index) = self.cart.position(name) {
            self.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.save();
        self.view.render(&self.cart);
    }

    /// Simulate placing an order.
    ///
    /// On a validation failure the user is alerted and nothing else
    /// happens. On success the cart is emptied for good.
    pub fn checkout(&mut self, form: &CheckoutForm) -> Result<Order, CheckoutError> {
        let customer = match form.validate() {
            Ok(customer) => customer,
            Err(e) => {
                self.view.alert(e.to_string());
                return Err(e);
            }
        };

        if self.cart.is_empty() {
            let e = CheckoutError::EmptyCart;
            self.view.alert(e.to_string());
            return Err(e);
        }

        let order = Order {
            customer,
            items: self.cart.items().to_vec(),
            total: self.cart.total(),
            placed_at: Local::now(),
        };

        self.view.confirm_order(&order);

        if let Err(e) = self.store.delete(CART_KEY) {
            tracing::warn!("⚠️  Could not delete persisted cart: {}", e);
        }
        self.clear();
        self.view.reset_form();

        tracing::info!(
            "✅ Order placed by {}: {} items, {}",
            order.customer.name,
            order.items.len(),
            format_money(&self.currency, order.total)
        );

        Ok(order)
    }

    /// Write the cart to the store. Failures are logged; the in-memory
    /// cart stays authoritative.
    fn save(&mut self) {
        let result = self
            .cart
            .to_json()
            .map_err(Into::into)
            .and_then(|json| self.store.set(CART_KEY, &json));

        if let Err(e) = result {
            tracing::warn!("⚠️  Could not persist cart: {}", e);
        }
    }

    fn load_persisted(&self) -> Cart {
        let json = match self.store.get(CART_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!("⚠️  Could not read persisted cart: {}", e);
                return Cart::new();
            }
        };

        Cart::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!("⚠️  Ignoring malformed persisted cart: {}", e);
            Cart::new()
        })
    }
}
