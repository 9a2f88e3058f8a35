/// Cart page view model
///
/// `CartPage::render` rebuilds the whole model from the cart each time, so
/// rendering twice from the same cart gives the same page.
use iced::widget::{button, column, container, image, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use crate::state::cart::Cart;
use crate::state::checkout::CheckoutForm;
use crate::state::data::format_money;
use crate::ui::menu::ACCENT;
use crate::ui::picture;
use crate::Message;

pub const EMPTY_PLACEHOLDER: &str = "Your cart is empty.";

/// One rendered cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub name: String,
    pub image: String,
    /// e.g. "₹50.00 each"
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartPage {
    pub rows: Vec<CartRow>,
    /// Shown instead of rows when the cart is empty
    pub placeholder: Option<&'static str>,
    pub total: String,
    pub badge: u64,
}

impl CartPage {
    pub fn render(cart: &Cart, currency: &str) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                name: item.name.clone(),
                image: item.image_ref.clone(),
                unit_price: format!("{} each", format_money(currency, item.unit_price)),
                quantity: item.quantity,
                subtotal: format_money(currency, item.subtotal()),
            })
            .collect();

        Self {
            rows,
            placeholder: cart.is_empty().then_some(EMPTY_PLACEHOLDER),
            total: format_money(currency, cart.total()),
            badge: cart.badge_count(),
        }
    }

    pub fn view<'a>(&'a self, form: &'a CheckoutForm) -> Element<'a, Message> {
        let list: Element<Message> = match self.placeholder {
            Some(placeholder) => container(text(placeholder))
                .padding(10)
                .width(Length::Fill)
                .style(container::rounded_box)
                .into(),
            None => self
                .rows
                .iter()
                .fold(Column::new().spacing(10), |col, r| col.push(row_view(r)))
                .into(),
        };

        column![
            text("Your Cart").size(36),
            list,
            row![text("Total:").size(20), text(&self.total).size(20).color(ACCENT)]
                .spacing(8),
            checkout_form(form),
        ]
        .spacing(20)
        .padding(24)
        .into()
    }
}

fn row_view(r: &CartRow) -> Element<'_, Message> {
    let quantity = row![
        button("−").on_press(Message::ChangeQuantity(r.name.clone(), -1)),
        text(r.quantity.to_string()).size(16),
        button("+").on_press(Message::ChangeQuantity(r.name.clone(), 1)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let line = row![
        text(&r.subtotal).size(16),
        button("Remove")
            .on_press(Message::RemoveItem(r.name.clone()))
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(
        row![
            image(picture::product_image(&r.image))
                .width(Length::Fixed(80.0))
                .height(Length::Fixed(60.0)),
            column![text(&r.name).size(18), text(&r.unit_price).color(ACCENT)]
                .spacing(6)
                .width(Length::Fill),
            column![quantity, line].spacing(8).align_x(Alignment::End),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .style(container::rounded_box)
    .into()
}

fn checkout_form(form: &CheckoutForm) -> Element<'_, Message> {
    column![
        text("Checkout").size(24),
        text_input("Name", &form.name).on_input(Message::NameChanged),
        text_input("Address", &form.address).on_input(Message::AddressChanged),
        text_input("Phone", &form.phone)
            .on_input(Message::PhoneChanged)
            .on_submit(Message::Checkout),
        button("Place Order")
            .on_press(Message::Checkout)
            .padding([10, 16])
            .style(button::primary),
    ]
    .spacing(10)
    .max_width(480.0)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart() {
        let page = CartPage::render(&Cart::new(), "₹");
        assert!(page.rows.is_empty());
        assert_eq!(page.placeholder, Some(EMPTY_PLACEHOLDER));
        assert_eq!(page.total, "₹0.00");
        assert_eq!(page.badge, 0);
    }

    #[test]
    fn test_rows_follow_cart_order() {
        let mut cart = Cart::new();
        cart.add("Orange", 40.0, "orange.jpg");
        cart.add("Mango", 50.0, "mango.jpg");
        cart.add("Orange", 40.0, "orange.jpg");

        let page = CartPage::render(&cart, "₹");
        assert_eq!(page.placeholder, None);
        assert_eq!(
            page.rows[0],
            CartRow {
                name: "Orange".into(),
                image: "orange.jpg".into(),
                unit_price: "₹40.00 each".into(),
                quantity: 2,
                subtotal: "₹80.00".into(),
            }
        );
        assert_eq!(page.rows[1].name, "Mango");
        assert_eq!(page.total, "₹130.00");
        assert_eq!(page.badge, 3);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut cart = Cart::new();
        cart.add("Mango", 50.0, "mango.jpg");
        assert_eq!(CartPage::render(&cart, "₹"), CartPage::render(&cart, "₹"));
    }
}
