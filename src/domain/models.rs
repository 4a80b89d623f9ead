//! Core data structures for the ArtDrop terminal mockup.
//!
//! Everything here is mock data shaped after the original app design:
//! art kits, drivers, conversations, reels and artist stats. Prices are
//! stored in cents to keep the cart arithmetic exact.

use serde::{Deserialize, Serialize};

/// Which side of the marketplace the signed-in user is on.
///
/// Chosen at login/signup and used to resolve the profile tab
/// (buyers get the profile screen, artists get their dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Buyer,
    Artist,
}

/// An art kit sold on the marketplace.
///
/// # Examples
///
/// ```
/// use artdrop::domain::Catalog;
///
/// let catalog = Catalog::default();
/// let kit = catalog.product(1).unwrap();
/// assert_eq!(kit.title, "Watercolor Sunset Kit");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Price in cents (e.g. 3499 renders as "$34.99").
    pub price_cents: u32,
    /// Rating in tenths (48 renders as "4.8").
    pub rating_tenths: u8,
    pub difficulty: String,
    pub category: String,
    pub description: String,
    /// What's in the box, shown on the product detail screen.
    pub includes: Vec<String>,
}

/// One line of the shopping cart: a product reference plus quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: u32,
    pub quantity: u32,
}

/// A delivery driver from the mock fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub initials: String,
    pub rating_tenths: u8,
    pub deliveries: u32,
    pub vehicle: String,
    pub plate: String,
}

/// A priced line item captured when an order is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub title: String,
    pub quantity: u32,
    pub price_cents: u32,
}

/// Snapshot of an order taken at payment time.
///
/// Carried through the delivery-tracking screens as navigation payload;
/// never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub subtotal_cents: u32,
    pub shipping_cents: u32,
    pub tax_cents: u32,
    pub total_cents: u32,
}

/// An inbox conversation on the messages screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub name: String,
    pub handle: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
}

/// A short video in the reels feed, tagged with the kit it features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    pub artist: String,
    pub handle: String,
    pub caption: String,
    pub likes: u32,
    pub kit_id: u32,
    pub kit_title: String,
}

/// Per-kit sales figures on the artist dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitStats {
    pub title: String,
    pub sales: u32,
    pub revenue_cents: u32,
}

/// Aggregate artist figures shown on the dashboard and analytics screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistStats {
    pub total_earnings_cents: u32,
    pub total_sales: u32,
    pub active_kits: u32,
    pub followers: u32,
    /// Month-over-month growth in percent.
    pub monthly_growth_pct: u32,
}

/// Formats a cent amount as a dollar string, e.g. 3499 -> "$34.99".
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Formats a tenths-scaled rating, e.g. 48 -> "4.8".
pub fn format_rating(tenths: u8) -> String {
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(3499), "$34.99");
        assert_eq!(format_price(900), "$9.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(48), "4.8");
        assert_eq!(format_rating(50), "5.0");
    }

    #[test]
    fn test_order_summary_default_is_empty() {
        let summary = OrderSummary::default();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total_cents, 0);
    }

    #[test]
    fn test_product_serde_round_trip() {
        let product = Product {
            id: 7,
            title: "Test Kit".to_string(),
            artist: "Tester".to_string(),
            price_cents: 1999,
            rating_tenths: 45,
            difficulty: "Beginner".to_string(),
            category: "test".to_string(),
            description: "A kit".to_string(),
            includes: vec!["Brushes".to_string()],
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
