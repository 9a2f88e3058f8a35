/// Menu page: collapsible sections of product cards
///
/// Only one section is open at a time. Opening a section closes the
/// others; the app scrolls the opened section into view shortly after.
use iced::widget::{button, column, container, image, scrollable, text, Column};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Wrap;
use std::time::Duration;

use super::picture;
use crate::state::data::{format_money, MenuSection, Product};
use crate::Message;

/// Brand orange used for prices
pub const ACCENT: Color = Color::from_rgb(1.0, 0.42, 0.0);

/// Frames in one smooth scroll, and the time between them
pub const SCROLL_FRAMES: usize = 12;
pub const SCROLL_FRAME: Duration = Duration::from_millis(16);

/// Id of the menu page scrollable
pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("menu-sections")
}

#[derive(Debug, Clone)]
pub struct MenuAccordion {
    sections: Vec<MenuSection>,
    open: Option<usize>,
    /// Last relative vertical position reported by the scrollable
    scroll_y: f32,
}

impl MenuAccordion {
    pub fn new(sections: Vec<MenuSection>) -> Self {
        Self {
            sections,
            open: None,
            scroll_y: 0.0,
        }
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Flip section `index`, closing every other section first.
    /// Returns false for an unknown section.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        true
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll_y
    }

    /// Record where the scrollable is. Ignores the NaN reported when the
    /// content fits without scrolling.
    pub fn scrolled_to(&mut self, y: f32) {
        if y.is_finite() {
            self.scroll_y = y.clamp(0.0, 1.0);
        }
    }

    /// Where section `index` sits in the scrollable, 0.0 (top) to 1.0 (bottom)
    pub fn scroll_offset(&self, index: usize) -> scrollable::RelativeOffset {
        let last = self.sections.len().saturating_sub(1);
        let y = if last == 0 {
            0.0
        } else {
            index.min(last) as f32 / last as f32
        };
        scrollable::RelativeOffset { x: 0.0, y }
    }

    pub fn view<'a>(&'a self, currency: &'a str) -> Element<'a, Message> {
        let sections: Column<Message> = self
            .sections()
            .iter()
            .enumerate()
            .fold(column![].spacing(16), |col, (index, section)| {
                col.push(self.section_view(index, section, currency))
            });

        scrollable(
            column![text("Our Menu").size(36), sections]
                .spacing(20)
                .padding(24)
                .width(Length::Fill),
        )
        .id(scroll_id())
        .on_scroll(|viewport| Message::MenuScrolled(viewport.relative_offset().y))
        .height(Length::Fill)
        .into()
    }

    fn section_view<'a>(
        &'a self,
        index: usize,
        section: &'a MenuSection,
        currency: &'a str,
    ) -> Element<'a, Message> {
        let marker = if self.is_open(index) { "▾" } else { "▸" };
        let toggle = button(text(format!("{} {}", marker, section.title)).size(22))
            .on_press(Message::ToggleSection(index))
            .width(Length::Fill)
            .style(button::text);

        let mut content = column![toggle].spacing(12);
        if self.is_open(index) {
            let cards = section
                .products
                .iter()
                .map(|product| product_card(product, currency))
                .collect();
            content = content.push(Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0));
        }

        container(content)
            .padding(12)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }
}

/// Positions for an eased (ease-out cubic) scroll from `from` to `to`.
/// The last step is always exactly `to`.
pub fn scroll_steps(from: f32, to: f32, frames: usize) -> Vec<f32> {
    let frames = frames.max(1);
    (1..=frames)
        .map(|frame| {
            if frame == frames {
                return to;
            }
            let t = frame as f32 / frames as f32;
            let eased = 1.0 - (1.0 - t).powi(3);
            from + (to - from) * eased
        })
        .collect()
}

fn product_card<'a>(product: &'a Product, currency: &'a str) -> Element<'a, Message> {
    let card = column![
        image(picture::product_image(&product.image))
            .width(Length::Fixed(140.0))
            .height(Length::Fixed(100.0)),
        text(&product.name).size(16),
        text(format_money(currency, product.price)).color(ACCENT),
        button("Add to Cart").on_press(Message::AddToCart(product.clone())),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    container(card)
        .padding(10)
        .width(Length::Fixed(170.0))
        .style(container::bordered_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::default_menu;

    #[test]
    fn test_single_section_open() {
        let mut menu = MenuAccordion::new(default_menu());
        assert!(menu.toggle(0));
        assert!(menu.is_open(0));

        assert!(menu.toggle(2));
        assert!(menu.is_open(2));
        assert!(!menu.is_open(0));
    }

    #[test]
    fn test_toggle_open_section_closes_it() {
        let mut menu = MenuAccordion::new(default_menu());
        menu.toggle(1);
        menu.toggle(1);
        assert!((0..menu.sections().len()).all(|i| !menu.is_open(i)));
    }

    #[test]
    fn test_unknown_section() {
        let mut menu = MenuAccordion::new(default_menu());
        menu.toggle(0);
        assert!(!menu.toggle(99));
        assert!(menu.is_open(0));
    }

    #[test]
    fn test_scroll_offset() {
        let menu = MenuAccordion::new(default_menu());
        assert_eq!(menu.scroll_offset(0).y, 0.0);
        assert_eq!(menu.scroll_offset(1).y, 0.5);
        assert_eq!(menu.scroll_offset(2).y, 1.0);

        let single = MenuAccordion::new(default_menu()[..1].to_vec());
        assert_eq!(single.scroll_offset(0).y, 0.0);
    }

    #[test]
    fn test_scroll_steps_ease_to_target() {
        let steps = scroll_steps(0.2, 1.0, SCROLL_FRAMES);
        assert_eq!(steps.len(), SCROLL_FRAMES);
        assert_eq!(*steps.last().unwrap(), 1.0);
        assert!(steps.windows(2).all(|w| w[0] <= w[1]));
        assert!(steps[0] > 0.2);
        // Ease-out: the first half of the frames covers most of the distance
        assert!(steps[SCROLL_FRAMES / 2 - 1] > 0.6);

        let up = scroll_steps(1.0, 0.0, 4);
        assert!(up.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*up.last().unwrap(), 0.0);
    }

    #[test]
    fn test_scroll_position_tracking() {
        let mut menu = MenuAccordion::new(default_menu());
        menu.scrolled_to(0.4);
        assert_eq!(menu.scroll_position(), 0.4);

        menu.scrolled_to(f32::NAN);
        assert_eq!(menu.scroll_position(), 0.4);

        menu.scrolled_to(1.5);
        assert_eq!(menu.scroll_position(), 1.0);
    }
}
