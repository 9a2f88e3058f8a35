/// State management module
///
/// This module handles all application state, including:
/// - The cart state machine (cart.rs) and its controller (controller.rs)
/// - Key/value storage ports (store.rs) and the SQLite profile store (profile.rs)
/// - The once-per-session reset (session.rs)
/// - Checkout validation (checkout.rs)
/// - Shared data structures (data.rs) and the menu (catalog.rs)

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod controller;
pub mod data;
pub mod profile;
pub mod session;
pub mod store;
