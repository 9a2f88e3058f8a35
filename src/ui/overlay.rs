/// Floating layers: toasts, the order confirmation and alert dialogs
use iced::widget::{button, column, container, opaque, text, Column};
use iced::{Alignment, Background, Color, Element, Length, Theme};

use super::menu::ACCENT;
use super::screen::{Confirmation, Toast};
use crate::Message;

/// Toasts stacked bottom-centre, above the floating button
pub fn toasts(toasts: &[Toast]) -> Element<'_, Message> {
    let stack: Column<Message> = toasts.iter().fold(column![].spacing(8), |col, toast| {
        let alpha = if toast.fading { 0.35 } else { 0.8 };
        col.push(
            container(text(&toast.message).color(Color::WHITE))
                .padding([8, 12])
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, alpha))),
                    border: iced::border::rounded(8.0),
                    ..container::Style::default()
                }),
        )
    });

    container(stack.align_x(Alignment::Center))
        .padding(iced::Padding {
            bottom: 90.0,
            ..iced::Padding::ZERO
        })
        .center_x(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
}

pub fn confirmation(confirmation: &Confirmation) -> Element<'_, Message> {
    modal(
        column![
            text("Order Confirmed!").size(24).color(ACCENT),
            text(&confirmation.summary),
            button("OK")
                .on_press(Message::DismissConfirmation)
                .style(button::primary),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into(),
    )
}

pub fn alert(message: &str) -> Element<'_, Message> {
    modal(
        column![
            text(message).size(18),
            button("OK").on_press(Message::AcknowledgeAlert),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
    )
}

/// Dimmed full-window backdrop that swallows input, with a centred box
fn modal(content: Element<'_, Message>) -> Element<'_, Message> {
    let dialog = container(content)
        .padding(20)
        .max_width(420.0)
        .style(container::rounded_box);

    opaque(
        container(dialog)
            .center(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
                ..container::Style::default()
            }),
    )
}
