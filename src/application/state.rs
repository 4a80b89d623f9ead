//! Application state for the ArtDrop terminal mockup.
//!
//! [`App`] owns the navigation stack, the signed-in session, the cart and
//! the transient per-screen UI state. Screens read from it and call its
//! methods; nothing else mutates the navigator. Every navigation goes
//! through [`App::navigate_to`] or [`App::go_back`], which also reset the
//! per-screen state and swap the screen's progress timer, so a timer can
//! never outlive the screen that armed it.

use crate::application::timers::{
    ScreenTimer, ARRIVING_START, ETA_START_MINUTES, PACKING_START_PCT, PACKING_STEP_PCT,
};
use crate::domain::{
    order_number, CartItem, Catalog, Navigator, Payload, ScreenId, UserType,
};

/// Bottom tab bar entries shown once the user is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Reels,
    Cart,
    Messages,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Reels, Tab::Cart, Tab::Messages, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Reels => "Reels",
            Tab::Cart => "Cart",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
        }
    }

    /// The screen a tab resolves to. The profile tab depends on the
    /// user's side of the marketplace.
    pub fn screen(&self, user_type: Option<UserType>) -> ScreenId {
        match self {
            Tab::Home => ScreenId::Home,
            Tab::Reels => ScreenId::Reels,
            Tab::Cart => ScreenId::Cart,
            Tab::Messages => ScreenId::Messages,
            Tab::Profile => match user_type {
                Some(UserType::Artist) => ScreenId::ArtistDashboard,
                _ => ScreenId::Profile,
            },
        }
    }
}

/// Text form fields a screen asks for, in focus order. Screens without
/// forms get an empty slice.
pub fn form_field_labels(screen: ScreenId) -> &'static [&'static str] {
    match screen {
        ScreenId::Login => &["Email", "Password"],
        ScreenId::Signup => &["Name", "Email", "Password"],
        ScreenId::Checkout => &["Full Name", "Street Address", "City", "ZIP Code"],
        ScreenId::Payment => &["Cardholder Name", "Card Number", "Expiry (MM/YY)", "CVV"],
        _ => &[],
    }
}

/// Transient UI state scoped to the current screen.
///
/// Rebuilt from [`ScreenState::for_screen`] on every navigation, which
/// matches the original mockup's components re-declaring their local
/// state on each mount.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// Generic list cursor (kits, cart lines, conversations, ...).
    pub cursor: usize,
    /// Onboarding page or reel index.
    pub page: usize,
    /// Form field buffers, one per label in [`form_field_labels`].
    pub inputs: Vec<String>,
    /// Focused form field.
    pub focus: usize,
    /// Toggled interest indices on the personalization screen.
    pub picks: Vec<usize>,
    /// Reel indices the user liked this visit.
    pub liked: Vec<usize>,
    /// Role selected on the login/signup screens.
    pub role_pick: UserType,
    /// Packing progress percentage on driver-assigned.
    pub progress_pct: u16,
    /// Simulated ETA in minutes on driver-on-way.
    pub eta_minutes: u16,
    /// Arrival countdown on driver-arriving.
    pub countdown: u16,
}

impl ScreenState {
    pub fn for_screen(screen: ScreenId) -> Self {
        ScreenState {
            cursor: 0,
            page: 0,
            inputs: vec![String::new(); form_field_labels(screen).len()],
            focus: 0,
            picks: Vec::new(),
            liked: Vec::new(),
            role_pick: UserType::Buyer,
            progress_pct: if screen == ScreenId::DriverAssigned {
                PACKING_START_PCT
            } else {
                0
            },
            eta_minutes: if screen == ScreenId::DriverOnWay {
                ETA_START_MINUTES
            } else {
                0
            },
            countdown: if screen == ScreenId::DriverArriving {
                ARRIVING_START
            } else {
                0
            },
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    pub navigator: Navigator,
    pub catalog: Catalog,
    pub user_type: Option<UserType>,
    pub authenticated: bool,
    pub current_tab: Tab,
    pub cart: Vec<CartItem>,
    pub screen: ScreenState,
    pub timer: Option<ScreenTimer>,
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_catalog(Catalog::default())
    }
}

impl App {
    /// Builds the app around a catalog (the built-in mock data or one
    /// loaded from a file), seeded on the loading screen with its
    /// auto-advance timer armed.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let navigator = Navigator::new();
        let screen = ScreenState::for_screen(navigator.current_screen());
        let timer = ScreenTimer::for_screen(navigator.current_screen());
        App {
            navigator,
            catalog,
            user_type: None,
            authenticated: false,
            current_tab: Tab::Home,
            cart: vec![
                CartItem { product_id: 1, quantity: 1 },
                CartItem { product_id: 3, quantity: 2 },
            ],
            screen,
            timer,
            status_message: None,
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current_screen()
    }

    /// Navigates forward. Cancels the outgoing screen's timer, resets the
    /// per-screen state and arms the target screen's timer.
    pub fn navigate_to(&mut self, screen: ScreenId, payload: Payload) {
        self.navigator.navigate(screen, payload);
        self.enter_screen();
    }

    /// Navigates forward by kebab-case tag, falling back to home for
    /// unrecognized tags.
    pub fn navigate_named(&mut self, name: &str, payload: Payload) {
        self.navigator.navigate_named(name, payload);
        self.enter_screen();
    }

    /// Navigates one step back. The screen navigated back to is entered
    /// fresh: its state is reset and its timer re-armed, the same as the
    /// original remounting the component.
    pub fn go_back(&mut self) {
        self.navigator.back();
        self.enter_screen();
    }

    fn enter_screen(&mut self) {
        let screen = self.navigator.current_screen();
        self.screen = ScreenState::for_screen(screen);
        self.timer = ScreenTimer::for_screen(screen);
        self.status_message = None;
    }

    /// One poll-timeout tick. Advances the current screen's timer, if
    /// any, and applies its effect when it fires.
    pub fn tick(&mut self) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(),
            None => false,
        };
        if fired {
            self.timer_fired();
        }
    }

    fn timer_fired(&mut self) {
        match self.current_screen() {
            ScreenId::Loading => {
                self.navigate_to(ScreenId::Onboarding, Payload::Empty);
            }
            ScreenId::OrderPlaced => {
                let payload = self.navigator.payload().clone();
                self.navigate_to(ScreenId::DriverAssigned, payload);
            }
            ScreenId::DriverAssigned => {
                self.screen.progress_pct =
                    (self.screen.progress_pct + PACKING_STEP_PCT).min(100);
                if self.screen.progress_pct >= 100 {
                    let payload = self.delivery_payload();
                    self.navigate_to(ScreenId::DriverOnWay, payload);
                }
            }
            ScreenId::DriverOnWay => {
                self.screen.eta_minutes = self.screen.eta_minutes.saturating_sub(1);
                if self.screen.eta_minutes <= 1 {
                    let payload = self.delivery_payload();
                    self.navigate_to(ScreenId::DriverArriving, payload);
                }
            }
            ScreenId::DriverArriving => {
                self.screen.countdown = self.screen.countdown.saturating_sub(1);
                if self.screen.countdown == 0 {
                    let payload = self.delivery_payload();
                    self.navigate_to(ScreenId::DeliveryComplete, payload);
                }
            }
            // Timers are only armed for the screens above.
            _ => {}
        }
    }

    /// Upgrades the current order payload to a delivery payload with the
    /// assigned driver attached, preserving whatever is already there.
    fn delivery_payload(&self) -> Payload {
        let order_number = self
            .navigator
            .payload()
            .order_number()
            .unwrap_or("AD123456")
            .to_string();
        let summary = self
            .navigator
            .payload()
            .order_summary()
            .cloned()
            .unwrap_or_default();
        let driver = match self.navigator.payload().driver() {
            Some(driver) => driver.clone(),
            None => match self.catalog.assigned_driver() {
                Some(driver) => driver.clone(),
                None => return Payload::Order { order_number, summary },
            },
        };
        Payload::Delivery {
            order_number,
            summary,
            driver,
        }
    }

    // --- session -----------------------------------------------------

    /// Marks the session authenticated and moves on to personalization.
    pub fn login(&mut self, user_type: UserType) {
        self.user_type = Some(user_type);
        self.authenticated = true;
        self.current_tab = Tab::Home;
        self.navigate_to(ScreenId::Personalization, Payload::Empty);
    }

    /// True while both credential fields of the login/signup form are
    /// filled; the submit action stays disabled otherwise.
    pub fn can_submit_credentials(&self) -> bool {
        !self.screen.inputs.is_empty() && self.screen.inputs.iter().all(|s| !s.is_empty())
    }

    /// Submits the login/signup form with the selected role. Does nothing
    /// while a required field is empty.
    pub fn submit_credentials(&mut self) {
        if self.can_submit_credentials() {
            self.login(self.screen.role_pick);
        }
    }

    /// Switches bottom tabs. Goes through the navigator like any other
    /// transition, so the history invariant holds across tab changes.
    pub fn change_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.navigate_to(tab.screen(self.user_type), Payload::Empty);
    }

    /// The tab bar is shown only when signed in and on a tab screen.
    pub fn show_bottom_tabs(&self) -> bool {
        self.authenticated
            && matches!(
                self.current_screen(),
                ScreenId::Home
                    | ScreenId::Reels
                    | ScreenId::Cart
                    | ScreenId::Messages
                    | ScreenId::Profile
                    | ScreenId::ArtistDashboard
                    | ScreenId::ArtistAnalytics
            )
    }

    /// True while the current screen is capturing free text, so plain
    /// letter keys must not be treated as shortcuts.
    pub fn is_text_entry(&self) -> bool {
        !form_field_labels(self.current_screen()).is_empty()
    }

    // --- cart --------------------------------------------------------

    /// Adds one of the given kit, merging with an existing line.
    pub fn add_to_cart(&mut self, product_id: u32) {
        match self.cart.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += 1,
            None => self.cart.push(CartItem { product_id, quantity: 1 }),
        }
    }

    /// Adjusts a line's quantity, removing the line at zero.
    pub fn change_quantity(&mut self, product_id: u32, delta: i32) {
        if let Some(item) = self.cart.iter_mut().find(|i| i.product_id == product_id) {
            let quantity = item.quantity as i32 + delta;
            if quantity <= 0 {
                self.cart.retain(|i| i.product_id != product_id);
            } else {
                item.quantity = quantity as u32;
            }
        }
    }

    /// Total item count across cart lines (the tab badge number).
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    // --- checkout ----------------------------------------------------

    /// True once the payment form passes the mockup's checks: every
    /// field filled and at least 15 card-number digits.
    pub fn can_submit_payment(&self) -> bool {
        if self.screen.inputs.len() < 2 || self.screen.inputs.iter().any(|s| s.is_empty()) {
            return false;
        }
        let digits = self.screen.inputs[1]
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        digits >= 15
    }

    /// Prices the cart into an order, generates an order number, empties
    /// the cart and moves to the order-placed screen. Gated on the
    /// payment form being valid and the cart being non-empty.
    pub fn place_order(&mut self) {
        if !self.can_submit_payment() {
            self.status_message =
                Some("Complete the payment form before placing your order.".to_string());
            return;
        }
        if self.cart.is_empty() {
            self.status_message = Some("Your cart is empty.".to_string());
            return;
        }
        let summary = self.catalog.price_order(&self.cart);
        self.cart.clear();
        self.navigate_to(
            ScreenId::OrderPlaced,
            Payload::Order {
                order_number: order_number(),
                summary,
            },
        );
    }

    /// Jumps the delivery flow one stage forward, the same transition
    /// the screen's timer would make. Backs the mockup's skip-ahead
    /// buttons; a no-op outside the delivery flow.
    pub fn advance_delivery(&mut self) {
        match self.current_screen() {
            ScreenId::OrderPlaced => {
                let payload = self.navigator.payload().clone();
                self.navigate_to(ScreenId::DriverAssigned, payload);
            }
            ScreenId::DriverAssigned => {
                let payload = self.delivery_payload();
                self.navigate_to(ScreenId::DriverOnWay, payload);
            }
            ScreenId::DriverOnWay => {
                let payload = self.delivery_payload();
                self.navigate_to(ScreenId::DriverArriving, payload);
            }
            ScreenId::DriverArriving => {
                let payload = self.delivery_payload();
                self.navigate_to(ScreenId::DeliveryComplete, payload);
            }
            ScreenId::DeliveryComplete => {
                let order_number = self
                    .navigator
                    .payload()
                    .order_number()
                    .unwrap_or("AD123456")
                    .to_string();
                self.navigate_to(ScreenId::Confirmation, Payload::Confirmation { order_number });
            }
            _ => {}
        }
    }

    // --- reels -------------------------------------------------------

    /// Toggles the like on the current reel.
    pub fn toggle_like(&mut self) {
        let index = self.screen.page;
        if let Some(pos) = self.screen.liked.iter().position(|&i| i == index) {
            self.screen.liked.remove(pos);
        } else {
            self.screen.liked.push(index);
        }
    }

    /// Like count for a reel including the user's own toggle.
    pub fn reel_likes(&self, index: usize) -> u32 {
        let base = self.catalog.reels.get(index).map(|r| r.likes).unwrap_or(0);
        if self.screen.liked.contains(&index) {
            base + 1
        } else {
            base
        }
    }
}
