use std::time::Duration;

use crate::config::ShopConfig;
use crate::state::cart::Cart;
use crate::state::checkout::{CheckoutForm, Order};
use crate::state::controller::CartView;
use crate::state::data::format_money;

use super::cart_page::CartPage;

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub fading: bool,
}

/// The "Order Confirmed!" overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub id: u64,
    pub summary: String,
}

/// Something the screen wants to happen later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    FadeToast(u64),
    ExpireToast(u64),
    DismissConfirmation(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub after: Duration,
    pub event: TimerEvent,
}

/// Wait out a timer on the async runtime, then hand back its event
pub async fn elapse(timer: Timer) -> TimerEvent {
    tokio::time::sleep(timer.after).await;
    timer.event
}

/// Everything the window shows that derives from the cart controller.
///
/// Implements `CartView`; timed effects are queued as `Timer`s which the
/// application turns into delayed messages.
#[derive(Debug)]
pub struct Screen {
    currency: String,
    toast_fade: Duration,
    toast_lifetime: Duration,
    confirmation_lifetime: Duration,

    pub cart_page: CartPage,
    pub form: CheckoutForm,
    pub toasts: Vec<Toast>,
    pub confirmation: Option<Confirmation>,
    pub alert: Option<String>,

    timers: Vec<Timer>,
    next_id: u64,
}

impl Screen {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            toast_fade: config.toast_fade(),
            toast_lifetime: config.toast_lifetime(),
            confirmation_lifetime: config.confirmation_lifetime(),
            cart_page: CartPage::render(&Cart::new(), &config.currency),
            form: CheckoutForm::default(),
            toasts: Vec::new(),
            confirmation: None,
            alert: None,
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Badge value shown in the navigation bar
    pub fn badge(&self) -> u64 {
        self.cart_page.badge
    }

    /// Take the timers queued since the last call
    pub fn drain_timers(&mut self) -> Vec<Timer> {
        std::mem::take(&mut self.timers)
    }

    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::FadeToast(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                    toast.fading = true;
                }
            }
            TimerEvent::ExpireToast(id) => self.toasts.retain(|t| t.id != id),
            TimerEvent::DismissConfirmation(id) => {
                // Only the overlay that scheduled this timer
                if self.confirmation.as_ref().is_some_and(|c| c.id == id) {
                    self.confirmation = None;
                }
            }
        }
    }

    /// OK pressed on the confirmation overlay
    pub fn dismiss_confirmation(&mut self) {
        self.confirmation = None;
    }

    /// OK pressed on the alert dialog
    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn schedule(&mut self, after: Duration, event: TimerEvent) {
        self.timers.push(Timer { after, event });
    }
}

impl CartView for Screen {
    fn render(&mut self, cart: &Cart) {
        self.cart_page = CartPage::render(cart, &self.currency);
    }

    fn notify(&mut self, message: String) {
        let id = self.next_id();
        self.toasts.push(Toast {
            id,
            message,
            fading: false,
        });
        self.schedule(self.toast_fade, TimerEvent::FadeToast(id));
        self.schedule(self.toast_lifetime, TimerEvent::ExpireToast(id));
    }

    fn alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    fn confirm_order(&mut self, order: &Order) {
        let id = self.next_id();
        self.confirmation = Some(Confirmation {
            id,
            summary: format!(
                "{} items, {} total, placed at {}.\nDelivering to {} (we'll call {}).\n\
                 Your delicious juices will reach soon. Thank you! 🍊",
                order.items.iter().map(|i| u64::from(i.quantity)).sum::<u64>(),
                format_money(&self.currency, order.total),
                order.placed_at.format("%H:%M"),
                order.customer.address,
                order.customer.phone,
            ),
        });
        self.schedule(self.confirmation_lifetime, TimerEvent::DismissConfirmation(id));
    }

    fn reset_form(&mut self) {
        self.form = CheckoutForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::checkout::ContactDetails;
    use crate::state::data::LineItem;
    use chrono::Local;

    fn order() -> Order {
        let mut item = LineItem::new("Mango", 50.0, "mango.jpg");
        item.quantity = 2;
        Order {
            customer: ContactDetails {
                name: "Asha".into(),
                address: "12 MG Road".into(),
                phone: "9845000000".into(),
            },
            items: vec![item],
            total: 100.0,
            placed_at: Local::now(),
        }
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut screen = Screen::new(&ShopConfig::default());
        screen.notify("Mango added • ₹50.00".into());

        let timers = screen.drain_timers();
        assert_eq!(
            timers,
            [
                Timer { after: Duration::from_millis(1400), event: TimerEvent::FadeToast(1) },
                Timer { after: Duration::from_millis(1800), event: TimerEvent::ExpireToast(1) },
            ]
        );
        assert!(screen.drain_timers().is_empty());

        screen.handle_timer(TimerEvent::FadeToast(1));
        assert!(screen.toasts[0].fading);

        screen.handle_timer(TimerEvent::ExpireToast(1));
        assert!(screen.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_elapse_returns_event() {
        let timer = Timer {
            after: Duration::from_millis(5),
            event: TimerEvent::ExpireToast(7),
        };
        assert_eq!(elapse(timer).await, TimerEvent::ExpireToast(7));
    }

    #[test]
    fn test_toasts_expire_independently() {
        let mut screen = Screen::new(&ShopConfig::default());
        screen.notify("first".into());
        screen.notify("second".into());

        screen.handle_timer(TimerEvent::ExpireToast(1));
        assert_eq!(screen.toasts.len(), 1);
        assert_eq!(screen.toasts[0].message, "second");
    }

    #[test]
    fn test_confirmation_auto_dismiss_matches_id() {
        let mut screen = Screen::new(&ShopConfig::default());
        screen.confirm_order(&order());
        screen.dismiss_confirmation();
        screen.confirm_order(&order());

        // The first overlay's timer must not close the second one
        screen.handle_timer(TimerEvent::DismissConfirmation(1));
        assert!(screen.confirmation.is_some());

        screen.handle_timer(TimerEvent::DismissConfirmation(2));
        assert!(screen.confirmation.is_none());
    }

    #[test]
    fn test_confirmation_summary() {
        let mut screen = Screen::new(&ShopConfig::default());
        screen.confirm_order(&order());
        let summary = &screen.confirmation.as_ref().unwrap().summary;
        assert!(summary.starts_with("2 items, ₹100.00 total, placed at "));
        assert!(summary.contains("Delivering to 12 MG Road (we'll call 9845000000)."));
        assert_eq!(
            screen.drain_timers()[0].after,
            Duration::from_millis(4200)
        );
    }

    #[test]
    fn test_render_and_reset_form() {
        let mut screen = Screen::new(&ShopConfig::default());
        let mut cart = Cart::new();
        cart.add("Mango", 50.0, "mango.jpg");
        cart.add("Mango", 50.0, "mango.jpg");

        screen.render(&cart);
        assert_eq!(screen.badge(), 2);

        screen.form.name = "Asha".into();
        screen.reset_form();
        assert_eq!(screen.form, CheckoutForm::default());

        screen.alert("Cart is empty.".into());
        screen.acknowledge_alert();
        assert!(screen.alert.is_none());
    }
}
