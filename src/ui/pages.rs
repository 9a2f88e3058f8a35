/// Static pages and the navigation bar
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::menu::ACCENT;
use super::nav::Page;
use crate::Message;

/// Top bar with page links and the cart badge
pub fn nav_bar(current: Page, badge: u64) -> Element<'static, Message> {
    let link = |page: Page| {
        let label = if page == Page::Cart {
            format!("{} ({})", page.title(), badge)
        } else {
            page.title().to_string()
        };
        let style = if page == current {
            button::primary
        } else {
            button::text
        };
        button(text(label))
            .on_press(Message::Navigate(page.path().to_string()))
            .style(style)
    };

    row![
        text("🍹 Juice Junction").size(24).color(ACCENT),
        horizontal_space(),
        link(Page::Home),
        link(Page::Menu),
        link(Page::Cart),
        link(Page::Contact),
    ]
    .spacing(8)
    .padding(12)
    .align_y(Alignment::Center)
    .into()
}

pub fn home() -> Element<'static, Message> {
    container(
        column![
            text("Fresh. Cold. Squeezed to order.").size(40),
            text("Fruit juices, shakes and coolers made the moment you order.").size(18),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

pub fn contact() -> Element<'static, Message> {
    column![
        text("Contact Us").size(36),
        text("Juice Junction, 14 Market Street"),
        text("Phone: +91 98450 12345"),
        text("Open every day, 9am to 10pm"),
    ]
    .spacing(12)
    .padding(24)
    .into()
}

/// Shown for a path the shop does not know
pub fn not_found() -> Element<'static, Message> {
    container(text("Page not found.").size(24))
        .center(Length::Fill)
        .into()
}
