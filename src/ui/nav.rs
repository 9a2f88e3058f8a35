/// Pages and the floating "next step" button
use iced::widget::{button, container, text};
use iced::{Element, Length};

use crate::Message;

/// The shop's pages, identified by their path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    Cart,
    Contact,
    /// A path the shop does not know
    Other,
}

impl Page {
    /// Work out the page from a path like `/shop/menu.html`.
    /// Only the last segment matters.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('/').next().unwrap_or_default() {
            "" | "index.html" => Page::Home,
            "menu.html" => Page::Menu,
            "cart.html" => Page::Cart,
            "contact.html" => Page::Contact,
            _ => Page::Other,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home | Page::Other => "index.html",
            Page::Menu => "menu.html",
            Page::Cart => "cart.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home | Page::Other => "Home",
            Page::Menu => "Menu",
            Page::Cart => "Cart",
            Page::Contact => "Contact",
        }
    }
}

/// The call-to-action injected on every page load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingButton {
    pub label: &'static str,
    pub destination: &'static str,
}

impl FloatingButton {
    pub fn for_page(page: Page) -> Self {
        let (label, destination) = match page {
            Page::Home => ("Order Now", "menu.html"),
            Page::Menu => ("View Cart", "cart.html"),
            Page::Cart => ("Contact", "contact.html"),
            Page::Contact => ("Back Home", "index.html"),
            Page::Other => ("Menu", "menu.html"),
        };
        Self { label, destination }
    }

    /// Bottom-right floating layer
    pub fn view(&self) -> Element<'_, Message> {
        container(
            button(text(self.label).size(16))
                .on_press(Message::Navigate(self.destination.to_string()))
                .padding([12, 20])
                .style(button::primary),
        )
        .padding(20)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("index.html"), Page::Home);
        assert_eq!(Page::from_path("/shop/menu.html"), Page::Menu);
        assert_eq!(Page::from_path("cart.html"), Page::Cart);
        assert_eq!(Page::from_path("/a/b/contact.html"), Page::Contact);
        assert_eq!(Page::from_path("about.html"), Page::Other);
    }

    #[test]
    fn test_next_step_mapping() {
        let cases = [
            (Page::Home, "Order Now", "menu.html"),
            (Page::Menu, "View Cart", "cart.html"),
            (Page::Cart, "Contact", "contact.html"),
            (Page::Contact, "Back Home", "index.html"),
            (Page::Other, "Menu", "menu.html"),
        ];
        for (page, label, destination) in cases {
            assert_eq!(FloatingButton::for_page(page), FloatingButton { label, destination });
        }
    }

    #[test]
    fn test_destinations_are_known_pages() {
        for page in [Page::Home, Page::Menu, Page::Cart, Page::Contact, Page::Other] {
            let next = FloatingButton::for_page(page);
            assert_ne!(Page::from_path(next.destination), Page::Other);
        }
    }
}
