/// User interface module
///
/// - Per-page views (cart_page.rs, menu.rs, pages.rs)
/// - The floating next-step button and page identity (nav.rs)
/// - Toasts and modal dialogs (overlay.rs)
/// - Product pictures with a placeholder for missing files (picture.rs)
/// - The `CartView` implementation backing the window (screen.rs)

pub mod cart_page;
pub mod menu;
pub mod nav;
pub mod overlay;
pub mod pages;
pub mod picture;
pub mod screen;
