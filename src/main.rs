use clap::Parser;
use iced::widget::{column, container, scrollable, Stack};
use iced::{Element, Length, Task, Theme};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod ui;

use config::{Cli, ShopConfig};
use state::controller::CartController;
use state::data::Product;
use state::profile::ProfileStore;
use state::store::MemoryStore;
use ui::menu::MenuAccordion;
use ui::nav::{FloatingButton, Page};
use ui::screen::{Screen, TimerEvent};

/// Main application state
struct JuiceCart {
    /// Cart, profile store and the screen it renders into
    shop: CartController<ProfileStore, Screen>,
    /// Session-scoped flags; lives exactly as long as the window
    session: MemoryStore,
    /// Page currently shown
    page: Page,
    /// The next-step button injected by the last page load
    floating: Option<FloatingButton>,
    menu: MenuAccordion,
    menu_scroll_delay: Duration,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Load the page at this path
    Navigate(String),
    AddToCart(Product),
    /// Change the quantity of the named item by a delta
    ChangeQuantity(String, i64),
    RemoveItem(String),
    NameChanged(String),
    AddressChanged(String),
    PhoneChanged(String),
    Checkout,
    DismissConfirmation,
    AcknowledgeAlert,
    ToggleSection(usize),
    /// Start the smooth scroll towards an opened section
    ScrollToSection(usize),
    /// One frame of a smooth scroll, as a relative offset
    ScrollStep(f32),
    /// The menu scrollable moved (relative offset)
    MenuScrolled(f32),
    /// A delayed effect came due
    Timer(TimerEvent),
}

impl JuiceCart {
    /// Create the application and run the first page load
    fn new(config: ShopConfig, store: ProfileStore) -> (Self, Task<Message>) {
        let screen = Screen::new(&config);
        let mut app = JuiceCart {
            shop: CartController::new(store, screen, config.currency.clone()),
            session: MemoryStore::new(),
            page: Page::Home,
            floating: None,
            menu: MenuAccordion::new(config.menu()),
            menu_scroll_delay: config.menu_scroll_delay(),
        };

        let task = app.load_page(&config.start_page);
        (app, task)
    }

    /// Everything a fresh page load does: identify the page, replace the
    /// floating button, run the session reset and rehydrate the cart.
    fn load_page(&mut self, path: &str) -> Task<Message> {
        self.page = Page::from_path(path);
        self.floating = Some(FloatingButton::for_page(self.page));
        self.shop.page_load(&mut self.session);

        tracing::info!(
            "📄 Loaded {} ({} items in cart)",
            path,
            self.shop.cart().badge_count()
        );

        self.flush_timers()
    }

    /// Turn the screen's queued timers into delayed messages
    fn flush_timers(&mut self) -> Task<Message> {
        let timers = self.shop.view_mut().drain_timers();
        Task::batch(
            timers
                .into_iter()
                .map(|timer| Task::perform(ui::screen::elapse(timer), Message::Timer)),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(path) => return self.load_page(&path),
            Message::AddToCart(product) => {
                self.shop.add(&product.name, product.price, &product.image);
            }
            Message::ChangeQuantity(name, delta) => self.shop.change_quantity_of(&name, delta),
            Message::RemoveItem(name) => self.shop.remove_named(&name),
            Message::NameChanged(name) => self.shop.view_mut().form.name = name,
            Message::AddressChanged(address) => self.shop.view_mut().form.address = address,
            Message::PhoneChanged(phone) => self.shop.view_mut().form.phone = phone,
            Message::Checkout => {
                let form = self.shop.view().form.clone();
                // The user has already been alerted by the screen
                if let Err(e) = self.shop.checkout(&form) {
                    tracing::debug!("Checkout refused: {}", e);
                }
            }
            Message::DismissConfirmation => self.shop.view_mut().dismiss_confirmation(),
            Message::AcknowledgeAlert => self.shop.view_mut().acknowledge_alert(),
            Message::ToggleSection(index) => {
                if self.menu.toggle(index) && self.menu.is_open(index) {
                    let timer_delay = self.menu_scroll_delay;
                    return Task::perform(
                        async move { tokio::time::sleep(timer_delay).await },
                        move |_| Message::ScrollToSection(index),
                    );
                }
            }
            Message::ScrollToSection(index) => {
                let target = self.menu.scroll_offset(index).y;
                let steps = ui::menu::scroll_steps(
                    self.menu.scroll_position(),
                    target,
                    ui::menu::SCROLL_FRAMES,
                );
                return Task::batch(steps.into_iter().zip(1u32..).map(|(y, frame)| {
                    let after = ui::menu::SCROLL_FRAME * frame;
                    Task::perform(
                        async move { tokio::time::sleep(after).await },
                        move |_| Message::ScrollStep(y),
                    )
                }));
            }
            Message::ScrollStep(y) => {
                return scrollable::snap_to(
                    ui::menu::scroll_id(),
                    scrollable::RelativeOffset { x: 0.0, y },
                );
            }
            Message::MenuScrolled(y) => self.menu.scrolled_to(y),
            Message::Timer(event) => self.shop.view_mut().handle_timer(event),
        }

        self.flush_timers()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let screen = self.shop.view();

        let body: Element<Message> = match self.page {
            Page::Home => ui::pages::home(),
            Page::Menu => self.menu.view(self.shop.currency()),
            Page::Cart => scrollable(screen.cart_page.view(&screen.form))
                .height(Length::Fill)
                .into(),
            Page::Contact => ui::pages::contact(),
            Page::Other => ui::pages::not_found(),
        };

        let page = column![ui::pages::nav_bar(self.page, screen.badge()), body];

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(container(page).width(Length::Fill).height(Length::Fill));

        if let Some(floating) = &self.floating {
            layers = layers.push(floating.view());
        }
        if !screen.toasts.is_empty() {
            layers = layers.push(ui::overlay::toasts(&screen.toasts));
        }
        if let Some(confirmation) = &screen.confirmation {
            layers = layers.push(ui::overlay::confirmation(confirmation));
        }
        if let Some(message) = &screen.alert {
            layers = layers.push(ui::overlay::alert(message));
        }

        layers.into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("JUICE_CART_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let cli = Cli::parse();
    let config = match ShopConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let Some(db_path) = config.database.clone().or_else(ProfileStore::default_path) else {
        tracing::error!("❌ Could not determine a data directory; pass --database");
        std::process::exit(1);
    };

    // The app cannot keep a cart without its database
    let store = match ProfileStore::open(&db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to open {}: {}", db_path.display(), e);
            std::process::exit(1);
        }
    };
    tracing::info!("🛒 Cart kept in {}", store.path().display());

    iced::application("Juice Junction", JuiceCart::update, JuiceCart::view)
        .theme(JuiceCart::theme)
        .centered()
        .run_with(move || JuiceCart::new(config, store))
}
