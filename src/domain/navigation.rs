//! Screen navigation: the history stack at the heart of the mockup.
//!
//! [`Navigator`] owns the current screen identity, a navigation history
//! stack and the payload carried by each transition. Screens never touch
//! it directly; they go through the application layer, which forwards to
//! [`Navigator::navigate`] and [`Navigator::back`].
//!
//! Transitions are deliberately unconstrained: any screen may request any
//! other by tag. There is no transition table to update when a screen is
//! added, only a new [`ScreenId`] variant and a render arm.

use crate::domain::models::{Driver, OrderSummary};

/// Tag identifying one of the closed set of UI screens.
///
/// String names are kebab-case and round-trip through [`ScreenId::name`]
/// and [`ScreenId::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Loading,
    Onboarding,
    Login,
    Signup,
    Personalization,
    Home,
    Browse,
    Product,
    Cart,
    Checkout,
    Payment,
    OrderPlaced,
    DriverAssigned,
    DriverOnWay,
    DriverArriving,
    DeliveryComplete,
    Confirmation,
    Profile,
    Reels,
    Messages,
    ArtistDashboard,
    ArtistAnalytics,
    Search,
    Events,
    OrderDetails,
}

impl ScreenId {
    /// The kebab-case tag used by name-based navigation.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Loading => "loading",
            ScreenId::Onboarding => "onboarding",
            ScreenId::Login => "login",
            ScreenId::Signup => "signup",
            ScreenId::Personalization => "personalization",
            ScreenId::Home => "home",
            ScreenId::Browse => "browse",
            ScreenId::Product => "product",
            ScreenId::Cart => "cart",
            ScreenId::Checkout => "checkout",
            ScreenId::Payment => "payment",
            ScreenId::OrderPlaced => "order-placed",
            ScreenId::DriverAssigned => "driver-assigned",
            ScreenId::DriverOnWay => "driver-on-way",
            ScreenId::DriverArriving => "driver-arriving",
            ScreenId::DeliveryComplete => "delivery-complete",
            ScreenId::Confirmation => "confirmation",
            ScreenId::Profile => "profile",
            ScreenId::Reels => "reels",
            ScreenId::Messages => "messages",
            ScreenId::ArtistDashboard => "artist-dashboard",
            ScreenId::ArtistAnalytics => "artist-analytics",
            ScreenId::Search => "search",
            ScreenId::Events => "events",
            ScreenId::OrderDetails => "order-details",
        }
    }

    /// Human-readable title shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Loading => "ArtDrop",
            ScreenId::Onboarding => "Welcome",
            ScreenId::Login => "Log In",
            ScreenId::Signup => "Sign Up",
            ScreenId::Personalization => "Personalize",
            ScreenId::Home => "Discover Art",
            ScreenId::Browse => "Browse Kits",
            ScreenId::Product => "Kit Details",
            ScreenId::Cart => "Your Cart",
            ScreenId::Checkout => "Checkout",
            ScreenId::Payment => "Payment",
            ScreenId::OrderPlaced => "Order Placed",
            ScreenId::DriverAssigned => "Preparing Order",
            ScreenId::DriverOnWay => "Driver On The Way",
            ScreenId::DriverArriving => "Driver Arriving",
            ScreenId::DeliveryComplete => "Delivered",
            ScreenId::Confirmation => "Confirmation",
            ScreenId::Profile => "Profile",
            ScreenId::Reels => "Reels",
            ScreenId::Messages => "Messages",
            ScreenId::ArtistDashboard => "Artist Dashboard",
            ScreenId::ArtistAnalytics => "Analytics",
            ScreenId::Search => "Search",
            ScreenId::Events => "Events",
            ScreenId::OrderDetails => "Order Details",
        }
    }

    /// Parses a kebab-case tag. Returns `None` for unrecognized names;
    /// callers decide the fallback (navigation by name lands on Home).
    pub fn parse(name: &str) -> Option<ScreenId> {
        let all = [
            ScreenId::Loading,
            ScreenId::Onboarding,
            ScreenId::Login,
            ScreenId::Signup,
            ScreenId::Personalization,
            ScreenId::Home,
            ScreenId::Browse,
            ScreenId::Product,
            ScreenId::Cart,
            ScreenId::Checkout,
            ScreenId::Payment,
            ScreenId::OrderPlaced,
            ScreenId::DriverAssigned,
            ScreenId::DriverOnWay,
            ScreenId::DriverArriving,
            ScreenId::DeliveryComplete,
            ScreenId::Confirmation,
            ScreenId::Profile,
            ScreenId::Reels,
            ScreenId::Messages,
            ScreenId::ArtistDashboard,
            ScreenId::ArtistAnalytics,
            ScreenId::Search,
            ScreenId::Events,
            ScreenId::OrderDetails,
        ];
        all.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Screen-specific data carried through a navigation transition.
///
/// The original passed an untyped bag; here each consuming screen declares
/// its own variant. A screen handed a variant it does not expect renders
/// its defaults instead of erroring.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    Empty,
    /// Category filter for the browse screen.
    Browse { category: Option<String> },
    /// Kit to show on the product detail screen.
    Product { product_id: u32 },
    /// Kit that was just added, highlighted at the top of the cart.
    AddedToCart { product_id: u32 },
    /// Order snapshot for order-placed and driver-assigned.
    Order {
        order_number: String,
        summary: OrderSummary,
    },
    /// Order plus assigned driver for the in-transit screens.
    Delivery {
        order_number: String,
        summary: OrderSummary,
        driver: Driver,
    },
    /// Just the order number, for the confirmation screen.
    Confirmation { order_number: String },
}

impl Payload {
    /// The order number, if this payload carries one.
    pub fn order_number(&self) -> Option<&str> {
        match self {
            Payload::Order { order_number, .. }
            | Payload::Delivery { order_number, .. }
            | Payload::Confirmation { order_number } => Some(order_number),
            _ => None,
        }
    }

    /// The order summary, if this payload carries one.
    pub fn order_summary(&self) -> Option<&OrderSummary> {
        match self {
            Payload::Order { summary, .. } | Payload::Delivery { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// The assigned driver, if this payload carries one.
    pub fn driver(&self) -> Option<&Driver> {
        match self {
            Payload::Delivery { driver, .. } => Some(driver),
            _ => None,
        }
    }
}

/// One historical record of a screen and the payload it was entered with.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEntry {
    pub screen: ScreenId,
    pub payload: Payload,
}

/// The navigation history stack.
///
/// The stack is seeded with the loading screen and is never empty; the
/// current screen is always the last entry. Mutation happens only through
/// [`Navigator::navigate`] (append) and [`Navigator::back`] (truncate one,
/// no-op at the root).
#[derive(Debug)]
pub struct Navigator {
    history: Vec<NavigationEntry>,
}

impl Navigator {
    /// Creates a navigator seeded with the loading screen.
    pub fn new() -> Self {
        Navigator {
            history: vec![NavigationEntry {
                screen: ScreenId::Loading,
                payload: Payload::Empty,
            }],
        }
    }

    /// The entry at the top of the stack.
    pub fn current(&self) -> &NavigationEntry {
        // The seed entry is pushed in new() and back() guards depth > 1,
        // so the stack is never empty.
        match self.history.last() {
            Some(entry) => entry,
            None => unreachable!("navigation history is never empty"),
        }
    }

    /// The screen currently displayed.
    pub fn current_screen(&self) -> ScreenId {
        self.current().screen
    }

    /// The payload the current screen was entered with.
    pub fn payload(&self) -> &Payload {
        &self.current().payload
    }

    /// Pushes a new entry and makes it current. Strictly additive; prior
    /// history is preserved beneath it. Any screen may navigate to any
    /// other, there is no transition validation.
    pub fn navigate(&mut self, screen: ScreenId, payload: Payload) {
        self.history.push(NavigationEntry { screen, payload });
    }

    /// Navigates by kebab-case tag. Unrecognized tags fall back to the
    /// home screen with an empty payload rather than erroring.
    pub fn navigate_named(&mut self, name: &str, payload: Payload) {
        match ScreenId::parse(name) {
            Some(screen) => self.navigate(screen, payload),
            None => self.navigate(ScreenId::Home, Payload::Empty),
        }
    }

    /// Drops the top entry and restores the previous one. No-op when only
    /// the seed entry remains; the stack never underflows.
    pub fn back(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
    }

    /// Number of entries on the stack (1 on a fresh start).
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_loading_with_seed_entry() {
        let nav = Navigator::new();
        assert_eq!(nav.current_screen(), ScreenId::Loading);
        assert_eq!(*nav.payload(), Payload::Empty);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_appends_one_entry_per_call() {
        let mut nav = Navigator::new();
        let screens = [
            ScreenId::Onboarding,
            ScreenId::Login,
            ScreenId::Home,
            ScreenId::Browse,
            ScreenId::Product,
        ];
        for (i, screen) in screens.iter().enumerate() {
            nav.navigate(*screen, Payload::Empty);
            assert_eq!(nav.depth(), i + 2); // seed entry plus i+1 pushes
        }
    }

    #[test]
    fn test_navigate_preserves_prior_history() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Home, Payload::Empty);
        nav.navigate(
            ScreenId::Product,
            Payload::Product { product_id: 2 },
        );
        nav.back();
        assert_eq!(nav.current_screen(), ScreenId::Home);
        nav.back();
        assert_eq!(nav.current_screen(), ScreenId::Loading);
    }

    #[test]
    fn test_back_decrements_depth_and_restores_screen() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Login, Payload::Empty);
        nav.navigate(ScreenId::Signup, Payload::Empty);
        let depth_before = nav.depth();
        nav.back();
        assert_eq!(nav.depth(), depth_before - 1);
        assert_eq!(nav.current_screen(), ScreenId::Login);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut nav = Navigator::new();
        nav.back();
        assert_eq!(nav.current_screen(), ScreenId::Loading);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_payload_is_carried_to_target_screen() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Product, Payload::Product { product_id: 7 });
        assert_eq!(nav.current_screen(), ScreenId::Product);
        assert_eq!(
            *nav.payload(),
            Payload::Product { product_id: 7 }
        );
    }

    #[test]
    fn test_back_restores_previous_payload() {
        let mut nav = Navigator::new();
        nav.navigate(
            ScreenId::Browse,
            Payload::Browse {
                category: Some("date-night".to_string()),
            },
        );
        nav.navigate(ScreenId::Product, Payload::Product { product_id: 3 });
        nav.back();
        assert_eq!(
            *nav.payload(),
            Payload::Browse {
                category: Some("date-night".to_string()),
            }
        );
    }

    #[test]
    fn test_navigate_named_known_tag() {
        let mut nav = Navigator::new();
        nav.navigate_named("driver-on-way", Payload::Empty);
        assert_eq!(nav.current_screen(), ScreenId::DriverOnWay);
    }

    #[test]
    fn test_navigate_named_unknown_tag_falls_back_to_home() {
        let mut nav = Navigator::new();
        nav.navigate_named("nonexistent-screen", Payload::Product { product_id: 1 });
        assert_eq!(nav.current_screen(), ScreenId::Home);
        assert_eq!(*nav.payload(), Payload::Empty);
        // The fallback is still a push, not a reset.
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_login_signup_back_scenario() {
        let mut nav = Navigator::new();
        nav.navigate(ScreenId::Login, Payload::Empty);
        nav.navigate(ScreenId::Signup, Payload::Empty);
        nav.back();
        assert_eq!(nav.current_screen(), ScreenId::Login);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_screen_id_name_round_trip() {
        for name in ["loading", "order-placed", "artist-analytics", "reels"] {
            let screen = ScreenId::parse(name).unwrap();
            assert_eq!(screen.name(), name);
            assert_eq!(screen.to_string(), name);
        }
        assert_eq!(ScreenId::parse("not-a-screen"), None);
        assert_eq!(ScreenId::parse(""), None);
    }

    #[test]
    fn test_payload_accessors() {
        let summary = OrderSummary::default();
        let payload = Payload::Order {
            order_number: "AD123456".to_string(),
            summary: summary.clone(),
        };
        assert_eq!(payload.order_number(), Some("AD123456"));
        assert_eq!(payload.order_summary(), Some(&summary));
        assert_eq!(payload.driver(), None);
        assert_eq!(Payload::Empty.order_number(), None);
    }
}
