//! Keyboard handling for the ArtDrop terminal mockup.
//!
//! Keys are interpreted per screen. Screens never touch the navigator
//! directly; everything funnels through [`App`] methods, which keep the
//! history invariant and the timer lifecycle intact.

use crate::application::{form_field_labels, App, Tab};
use crate::domain::{Payload, ScreenId, UserType};
use crate::presentation::ui::{INTERESTS, ONBOARDING_PAGES, PROFILE_MENU};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        // Tab bar shortcuts apply wherever the bar is visible.
        if app.show_bottom_tabs() {
            if let KeyCode::Char(c @ '1'..='5') = key {
                let index = c as usize - '1' as usize;
                app.change_tab(Tab::ALL[index]);
                return;
            }
        }
        if key == KeyCode::Esc {
            app.go_back();
            return;
        }

        match app.current_screen() {
            ScreenId::Loading => {}
            ScreenId::Onboarding => Self::handle_onboarding(app, key),
            ScreenId::Login | ScreenId::Signup => Self::handle_credentials(app, key),
            ScreenId::Personalization => Self::handle_personalization(app, key),
            ScreenId::Home => Self::handle_home(app, key),
            ScreenId::Browse => Self::handle_browse(app, key),
            ScreenId::Product => Self::handle_product(app, key),
            ScreenId::Cart => Self::handle_cart(app, key),
            ScreenId::Checkout => Self::handle_checkout(app, key),
            ScreenId::Payment => Self::handle_payment(app, key),
            ScreenId::OrderPlaced
            | ScreenId::DriverAssigned
            | ScreenId::DriverOnWay
            | ScreenId::DriverArriving
            | ScreenId::DeliveryComplete => Self::handle_delivery(app, key),
            ScreenId::Confirmation => Self::handle_confirmation(app, key),
            ScreenId::Profile => Self::handle_list_cursor(app, key, PROFILE_MENU.len()),
            ScreenId::Reels => Self::handle_reels(app, key),
            ScreenId::Messages => {
                let count = app.catalog.conversations.len();
                Self::handle_list_cursor(app, key, count);
            }
            ScreenId::ArtistDashboard => Self::handle_artist_dashboard(app, key),
            ScreenId::ArtistAnalytics => {}
            // Placeholder screens: Enter heads home.
            _ => {
                if key == KeyCode::Enter {
                    app.navigate_to(ScreenId::Home, Payload::Empty);
                }
            }
        }
    }

    fn handle_onboarding(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Right => {
                if app.screen.page < ONBOARDING_PAGES.len() - 1 {
                    app.screen.page += 1;
                }
            }
            KeyCode::Left => {
                app.screen.page = app.screen.page.saturating_sub(1);
            }
            KeyCode::Enter => {
                app.navigate_to(ScreenId::Login, Payload::Empty);
            }
            KeyCode::Char('s') => {
                app.navigate_to(ScreenId::Signup, Payload::Empty);
            }
            _ => {}
        }
    }

    fn handle_credentials(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_credentials(),
            KeyCode::Left => app.screen.role_pick = UserType::Buyer,
            KeyCode::Right => app.screen.role_pick = UserType::Artist,
            _ => Self::handle_form_editing(app, key),
        }
    }

    /// Shared text-form editing: focus movement plus append/delete on
    /// the focused buffer.
    fn handle_form_editing(app: &mut App, key: KeyCode) {
        let fields = form_field_labels(app.current_screen()).len();
        if fields == 0 {
            return;
        }
        match key {
            KeyCode::Up => {
                app.screen.focus = app.screen.focus.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                app.screen.focus = (app.screen.focus + 1) % fields;
            }
            KeyCode::Backspace => {
                if let Some(input) = app.screen.inputs.get_mut(app.screen.focus) {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = app.screen.inputs.get_mut(app.screen.focus) {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_personalization(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up => app.screen.cursor = app.screen.cursor.saturating_sub(1),
            KeyCode::Down => {
                if app.screen.cursor + 1 < INTERESTS.len() {
                    app.screen.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                let index = app.screen.cursor;
                if let Some(pos) = app.screen.picks.iter().position(|&i| i == index) {
                    app.screen.picks.remove(pos);
                } else {
                    app.screen.picks.push(index);
                }
            }
            KeyCode::Enter => {
                app.navigate_to(ScreenId::Home, Payload::Empty);
            }
            _ => {}
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        let categories = app.catalog.categories.len();
        let featured = app.catalog.products.len().min(2);
        let total = categories + featured;
        match key {
            KeyCode::Up => app.screen.cursor = app.screen.cursor.saturating_sub(1),
            KeyCode::Down => {
                if app.screen.cursor + 1 < total {
                    app.screen.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if app.screen.cursor < categories {
                    let category = app.catalog.categories[app.screen.cursor].id.clone();
                    app.navigate_to(
                        ScreenId::Browse,
                        Payload::Browse {
                            category: Some(category),
                        },
                    );
                } else if let Some(kit) = app.catalog.products.get(app.screen.cursor - categories) {
                    let product_id = kit.id;
                    app.navigate_to(ScreenId::Product, Payload::Product { product_id });
                }
            }
            KeyCode::Char('b') => {
                app.navigate_to(ScreenId::Browse, Payload::Browse { category: None });
            }
            _ => {}
        }
    }

    fn handle_browse(app: &mut App, key: KeyCode) {
        let category = match app.navigator.payload() {
            Payload::Browse { category } => category.clone(),
            _ => None,
        };
        let kits = app.catalog.products_in(category.as_deref());
        match key {
            KeyCode::Up => app.screen.cursor = app.screen.cursor.saturating_sub(1),
            KeyCode::Down => {
                if app.screen.cursor + 1 < kits.len() {
                    app.screen.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(kit) = kits.get(app.screen.cursor) {
                    let product_id = kit.id;
                    app.navigate_to(ScreenId::Product, Payload::Product { product_id });
                }
            }
            _ => {}
        }
    }

    fn handle_product(app: &mut App, key: KeyCode) {
        if key == KeyCode::Enter {
            let product_id = match app.navigator.payload() {
                Payload::Product { product_id } => Some(*product_id),
                _ => None,
            }
            .or_else(|| app.catalog.products.first().map(|p| p.id));
            if let Some(product_id) = product_id {
                app.add_to_cart(product_id);
                app.navigate_to(ScreenId::Cart, Payload::AddedToCart { product_id });
            }
        }
    }

    fn handle_cart(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up => app.screen.cursor = app.screen.cursor.saturating_sub(1),
            KeyCode::Down => {
                if app.screen.cursor + 1 < app.cart.len() {
                    app.screen.cursor += 1;
                }
            }
            KeyCode::Char('+') => {
                if let Some(item) = app.cart.get(app.screen.cursor) {
                    let product_id = item.product_id;
                    app.change_quantity(product_id, 1);
                }
            }
            KeyCode::Char('-') => {
                if let Some(item) = app.cart.get(app.screen.cursor) {
                    let product_id = item.product_id;
                    app.change_quantity(product_id, -1);
                    app.screen.cursor = app.screen.cursor.min(app.cart.len().saturating_sub(1));
                }
            }
            KeyCode::Enter => {
                if !app.cart.is_empty() {
                    app.navigate_to(ScreenId::Checkout, Payload::Empty);
                }
            }
            KeyCode::Char('b') => {
                app.navigate_to(ScreenId::Browse, Payload::Browse { category: None });
            }
            _ => {}
        }
    }

    fn handle_checkout(app: &mut App, key: KeyCode) {
        if key == KeyCode::Enter {
            if app.screen.inputs.iter().all(|s| !s.is_empty()) {
                app.navigate_to(ScreenId::Payment, Payload::Empty);
            } else {
                app.status_message = Some("Fill in every address field to continue.".to_string());
            }
        } else {
            Self::handle_form_editing(app, key);
        }
    }

    fn handle_payment(app: &mut App, key: KeyCode) {
        if key == KeyCode::Enter {
            app.place_order();
        } else {
            Self::handle_form_editing(app, key);
        }
    }

    fn handle_delivery(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.advance_delivery(),
            KeyCode::Char('h') => {
                app.navigate_to(ScreenId::Home, Payload::Empty);
            }
            _ => {}
        }
    }

    fn handle_confirmation(app: &mut App, key: KeyCode) {
        if key == KeyCode::Enter {
            app.navigate_to(ScreenId::Home, Payload::Empty);
        }
    }

    fn handle_list_cursor(app: &mut App, key: KeyCode, count: usize) {
        match key {
            KeyCode::Up => app.screen.cursor = app.screen.cursor.saturating_sub(1),
            KeyCode::Down => {
                if count > 0 && app.screen.cursor + 1 < count {
                    app.screen.cursor += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_reels(app: &mut App, key: KeyCode) {
        let count = app.catalog.reels.len();
        match key {
            KeyCode::Up => app.screen.page = app.screen.page.saturating_sub(1),
            KeyCode::Down => {
                if count > 0 && app.screen.page + 1 < count {
                    app.screen.page += 1;
                }
            }
            KeyCode::Char('l') => app.toggle_like(),
            KeyCode::Enter => {
                if let Some(reel) = app.catalog.reels.get(app.screen.page) {
                    let product_id = reel.kit_id;
                    app.navigate_to(ScreenId::Product, Payload::Product { product_id });
                }
            }
            _ => {}
        }
    }

    fn handle_artist_dashboard(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('a') => {
                app.navigate_to(ScreenId::ArtistAnalytics, Payload::Empty);
            }
            _ => {
                let count = app.catalog.kit_stats.len();
                Self::handle_list_cursor(app, key, count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::App;

    fn key(app: &mut App, code: KeyCode) {
        InputHandler::handle_key_event(app, code, KeyModifiers::NONE);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_esc_navigates_back() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        app.navigate_to(ScreenId::Signup, Payload::Empty);
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[test]
    fn test_onboarding_pages_and_entry_points() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Onboarding, Payload::Empty);
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Right);
        key(&mut app, KeyCode::Right); // clamped at the last page
        assert_eq!(app.screen.page, ONBOARDING_PAGES.len() - 1);
        key(&mut app, KeyCode::Left);
        assert_eq!(app.screen.page, 1);

        key(&mut app, KeyCode::Char('s'));
        assert_eq!(app.current_screen(), ScreenId::Signup);
    }

    #[test]
    fn test_login_form_typing_and_submit() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        type_text(&mut app, "sarah@example.com");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "hunter2");
        assert_eq!(app.screen.inputs[0], "sarah@example.com");
        assert_eq!(app.screen.inputs[1], "hunter2");

        key(&mut app, KeyCode::Enter);
        assert!(app.authenticated);
        assert_eq!(app.current_screen(), ScreenId::Personalization);
    }

    #[test]
    fn test_login_submit_disabled_until_filled() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        type_text(&mut app, "sarah@example.com");
        key(&mut app, KeyCode::Enter);
        assert!(!app.authenticated);
        assert_eq!(app.current_screen(), ScreenId::Login);
    }

    #[test]
    fn test_role_selection_keys() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        key(&mut app, KeyCode::Right);
        assert_eq!(app.screen.role_pick, UserType::Artist);
        key(&mut app, KeyCode::Left);
        assert_eq!(app.screen.role_pick, UserType::Buyer);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        type_text(&mut app, "abc");
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.screen.inputs[0], "ab");
    }

    #[test]
    fn test_home_category_opens_browse_with_payload() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Home, Payload::Empty);
        key(&mut app, KeyCode::Down); // second category
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Browse);
        assert_eq!(
            *app.navigator.payload(),
            Payload::Browse {
                category: Some("date-night".to_string()),
            }
        );
    }

    #[test]
    fn test_home_featured_kit_opens_product() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Home, Payload::Empty);
        let categories = app.catalog.categories.len();
        for _ in 0..categories {
            key(&mut app, KeyCode::Down);
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Product);
        assert_eq!(*app.navigator.payload(), Payload::Product { product_id: 1 });
    }

    #[test]
    fn test_product_enter_adds_to_cart() {
        let mut app = App::default();
        app.cart.clear();
        app.navigate_to(ScreenId::Product, Payload::Product { product_id: 4 });
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Cart);
        assert_eq!(
            *app.navigator.payload(),
            Payload::AddedToCart { product_id: 4 }
        );
        assert_eq!(app.cart_count(), 1);
        assert_eq!(app.cart[0].product_id, 4);
    }

    #[test]
    fn test_cart_quantity_keys() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Cart, Payload::Empty);
        // Default cart line 0 is kit 1 x1.
        key(&mut app, KeyCode::Char('+'));
        assert_eq!(app.cart[0].quantity, 2);
        key(&mut app, KeyCode::Char('-'));
        key(&mut app, KeyCode::Char('-'));
        // Line removed at zero; cursor stays in bounds.
        assert_eq!(app.cart.len(), 1);
        assert!(app.screen.cursor < app.cart.len());
    }

    #[test]
    fn test_cart_enter_requires_items() {
        let mut app = App::default();
        app.cart.clear();
        app.navigate_to(ScreenId::Cart, Payload::Empty);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Cart);

        app.add_to_cart(2);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Checkout);
    }

    #[test]
    fn test_checkout_to_payment_to_order() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Checkout, Payload::Empty);
        for field in ["Sarah Johnson", "12 Studio Lane", "Portland", "97201"] {
            type_text(&mut app, field);
            key(&mut app, KeyCode::Tab);
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Payment);

        for field in ["Sarah Johnson", "4242 4242 4242 4242", "12/27", "123"] {
            type_text(&mut app, field);
            key(&mut app, KeyCode::Tab);
        }
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::OrderPlaced);
        assert!(app.cart.is_empty());
    }

    #[test]
    fn test_delivery_screens_skip_ahead_on_enter() {
        let mut app = App::default();
        app.navigate_to(
            ScreenId::OrderPlaced,
            Payload::Order {
                order_number: "ADTEST04".to_string(),
                summary: Default::default(),
            },
        );
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::DriverAssigned);
        key(&mut app, KeyCode::Char('h'));
        assert_eq!(app.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_tab_bar_number_keys() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Login, Payload::Empty);
        app.screen.inputs = vec!["a@b.c".to_string(), "pw".to_string()];
        app.submit_credentials();
        app.navigate_to(ScreenId::Home, Payload::Empty);
        assert!(app.show_bottom_tabs());

        key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_screen(), ScreenId::Reels);
        key(&mut app, KeyCode::Char('4'));
        assert_eq!(app.current_screen(), ScreenId::Messages);
    }

    #[test]
    fn test_tab_keys_ignored_when_bar_hidden() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Home, Payload::Empty);
        // Not signed in, so '2' is not a tab shortcut.
        key(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_reels_navigation_and_like() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Reels, Payload::Empty);
        let base = app.reel_likes(0);
        key(&mut app, KeyCode::Char('l'));
        assert_eq!(app.reel_likes(0), base + 1);

        key(&mut app, KeyCode::Down);
        assert_eq!(app.screen.page, 1);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Product);
        assert_eq!(*app.navigator.payload(), Payload::Product { product_id: 2 });
    }

    #[test]
    fn test_personalization_toggle_and_continue() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Personalization, Payload::Empty);
        key(&mut app, KeyCode::Char(' '));
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.screen.picks, vec![0, 1]);
        key(&mut app, KeyCode::Char(' '));
        assert_eq!(app.screen.picks, vec![0]);

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Home);
    }

    #[test]
    fn test_artist_dashboard_analytics_shortcut() {
        let mut app = App::default();
        app.navigate_to(ScreenId::ArtistDashboard, Payload::Empty);
        key(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen(), ScreenId::ArtistAnalytics);
    }

    #[test]
    fn test_placeholder_screen_enter_goes_home() {
        let mut app = App::default();
        app.navigate_to(ScreenId::Search, Payload::Empty);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen(), ScreenId::Home);
    }
}
