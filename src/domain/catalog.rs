//! The mock catalog backing every screen.
//!
//! All marketplace data in the mockup is hard-coded: kits, categories,
//! the driver fleet, the messages inbox, the reels feed and the artist
//! figures. [`Catalog::default`] builds the built-in data set; an
//! alternative catalog can be loaded from JSON through the
//! infrastructure layer.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::models::{
    ArtistStats, CartItem, Conversation, Driver, KitStats, OrderLine, OrderSummary, Product, Reel,
};

/// A themed kit category on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tag: String,
}

/// Hard-coded marketplace data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub drivers: Vec<Driver>,
    pub conversations: Vec<Conversation>,
    pub reels: Vec<Reel>,
    pub kit_stats: Vec<KitStats>,
    pub artist_stats: ArtistStats,
}

/// Orders over this subtotal ship free; below it a flat fee applies.
pub const FREE_SHIPPING_THRESHOLD_CENTS: u32 = 5000;
/// Flat shipping fee below the free-shipping threshold.
pub const SHIPPING_FEE_CENTS: u32 = 899;
/// Sales tax applied to the subtotal, in percent.
pub const TAX_RATE_PCT: u32 = 8;

impl Catalog {
    /// Looks up a kit by id.
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Kits in the given category, or every kit when no filter is set.
    pub fn products_in(&self, category: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// The driver assigned to a new order. The fleet is mock data, so
    /// assignment just takes the first driver.
    pub fn assigned_driver(&self) -> Option<&Driver> {
        self.drivers.first()
    }

    /// Sum of price x quantity over the cart, skipping ids that no
    /// longer resolve to a kit.
    pub fn cart_subtotal_cents(&self, items: &[CartItem]) -> u32 {
        items
            .iter()
            .filter_map(|item| {
                self.product(item.product_id)
                    .map(|p| p.price_cents * item.quantity)
            })
            .sum()
    }

    /// Prices a cart into an order snapshot: subtotal, shipping (free
    /// over the threshold), tax and total.
    pub fn price_order(&self, items: &[CartItem]) -> OrderSummary {
        let lines: Vec<OrderLine> = items
            .iter()
            .filter_map(|item| {
                self.product(item.product_id).map(|p| OrderLine {
                    title: p.title.clone(),
                    quantity: item.quantity,
                    price_cents: p.price_cents,
                })
            })
            .collect();
        let subtotal_cents = self.cart_subtotal_cents(items);
        let shipping_cents = if subtotal_cents > FREE_SHIPPING_THRESHOLD_CENTS || subtotal_cents == 0
        {
            0
        } else {
            SHIPPING_FEE_CENTS
        };
        let tax_cents = subtotal_cents * TAX_RATE_PCT / 100;
        OrderSummary {
            lines,
            subtotal_cents,
            shipping_cents,
            tax_cents,
            total_cents: subtotal_cents + shipping_cents + tax_cents,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            categories: vec![
                category("girls-night", "Girls' Night", "Paint & Sip Fun", "Popular"),
                category("date-night", "Date Night", "Romantic Art Sessions", "Trending"),
                category(
                    "family-christmas",
                    "Family Christmas",
                    "Holiday Crafts",
                    "Seasonal",
                ),
                category("bob-ross", "Bob Ross Night", "Happy Little Trees", "Classic"),
            ],
            products: vec![
                Product {
                    id: 1,
                    title: "Watercolor Sunset Kit".to_string(),
                    artist: "Maya Chen".to_string(),
                    price_cents: 3499,
                    rating_tenths: 48,
                    difficulty: "Beginner".to_string(),
                    category: "date-night".to_string(),
                    description: "Create a stunning watercolor sunset landscape with this \
                                  complete kit. Step-by-step video guidance from Maya Chen, \
                                  all premium supplies included."
                        .to_string(),
                    includes: vec![
                        "Premium watercolor paper pad".to_string(),
                        "12-color watercolor palette".to_string(),
                        "3 professional brushes".to_string(),
                        "Step-by-step video access".to_string(),
                    ],
                },
                Product {
                    id: 2,
                    title: "Abstract Acrylic Experience".to_string(),
                    artist: "David Rodriguez".to_string(),
                    price_cents: 4299,
                    rating_tenths: 49,
                    difficulty: "Intermediate".to_string(),
                    category: "girls-night".to_string(),
                    description: "Bold color and texture on canvas. A guided abstract \
                                  session designed for groups."
                        .to_string(),
                    includes: vec![
                        "2 stretched canvases".to_string(),
                        "Acrylic paint set".to_string(),
                        "Palette knives and brushes".to_string(),
                    ],
                },
                Product {
                    id: 3,
                    title: "Girls Night Paint & Sip".to_string(),
                    artist: "Holly Martinez".to_string(),
                    price_cents: 2899,
                    rating_tenths: 47,
                    difficulty: "Beginner".to_string(),
                    category: "girls-night".to_string(),
                    description: "Everything a group of four needs for a paint and sip \
                                  evening at home."
                        .to_string(),
                    includes: vec![
                        "4 mini canvases".to_string(),
                        "Shared paint station".to_string(),
                        "Party playlist card".to_string(),
                    ],
                },
                Product {
                    id: 4,
                    title: "Bob Ross Landscape Kit".to_string(),
                    artist: "Bob Ross Studio".to_string(),
                    price_cents: 3999,
                    rating_tenths: 50,
                    difficulty: "Beginner".to_string(),
                    category: "bob-ross".to_string(),
                    description: "Paint happy little trees with the classic wet-on-wet \
                                  technique."
                        .to_string(),
                    includes: vec![
                        "Oil paint starter set".to_string(),
                        "Fan brush and painting knife".to_string(),
                        "Canvas board".to_string(),
                    ],
                },
                Product {
                    id: 5,
                    title: "Holiday Christmas Crafts".to_string(),
                    artist: "Holly Martinez".to_string(),
                    price_cents: 2499,
                    rating_tenths: 46,
                    difficulty: "Family".to_string(),
                    category: "family-christmas".to_string(),
                    description: "Ornaments and cards for the whole family to make \
                                  together."
                        .to_string(),
                    includes: vec![
                        "Ornament blanks".to_string(),
                        "Glitter and glue set".to_string(),
                        "Card stock pack".to_string(),
                    ],
                },
                Product {
                    id: 6,
                    title: "Date Night Art Kit".to_string(),
                    artist: "Maya Chen".to_string(),
                    price_cents: 3299,
                    rating_tenths: 48,
                    difficulty: "Beginner".to_string(),
                    category: "date-night".to_string(),
                    description: "A two-easel session for couples, one shared scene \
                                  painted side by side."
                        .to_string(),
                    includes: vec![
                        "2 tabletop easels".to_string(),
                        "2 canvases".to_string(),
                        "Shared acrylic palette".to_string(),
                    ],
                },
            ],
            drivers: vec![Driver {
                name: "Maya Rodriguez".to_string(),
                initials: "MR".to_string(),
                rating_tenths: 49,
                deliveries: 1247,
                vehicle: "Toyota Prius - Blue".to_string(),
                plate: "7ABC123".to_string(),
            }],
            conversations: vec![
                Conversation {
                    name: "Maya Chen".to_string(),
                    handle: "@mayaart".to_string(),
                    last_message: "So glad you loved the sunset kit!".to_string(),
                    time: "2m ago".to_string(),
                    unread: 2,
                },
                Conversation {
                    name: "ArtDrop Support".to_string(),
                    handle: "@artdrop".to_string(),
                    last_message: "Your order AD123456 has been delivered.".to_string(),
                    time: "1h ago".to_string(),
                    unread: 0,
                },
                Conversation {
                    name: "David Rodriguez".to_string(),
                    handle: "@davidpaints".to_string(),
                    last_message: "New abstract kit drops Friday!".to_string(),
                    time: "3h ago".to_string(),
                    unread: 0,
                },
            ],
            reels: vec![
                Reel {
                    artist: "Maya Chen".to_string(),
                    handle: "@mayaart".to_string(),
                    caption: "Golden hour, watercolor edition".to_string(),
                    likes: 1247,
                    kit_id: 1,
                    kit_title: "Watercolor Sunset Kit".to_string(),
                },
                Reel {
                    artist: "David Rodriguez".to_string(),
                    handle: "@davidpaints".to_string(),
                    caption: "Texture study with palette knives".to_string(),
                    likes: 892,
                    kit_id: 2,
                    kit_title: "Abstract Acrylic Kit".to_string(),
                },
                Reel {
                    artist: "Holly Martinez".to_string(),
                    handle: "@hollycrafts".to_string(),
                    caption: "Paint night with the girls!".to_string(),
                    likes: 2156,
                    kit_id: 3,
                    kit_title: "Girls Night Paint Kit".to_string(),
                },
            ],
            kit_stats: vec![
                KitStats {
                    title: "Watercolor Sunset Kit".to_string(),
                    sales: 45,
                    revenue_cents: 157_455,
                },
                KitStats {
                    title: "Abstract Acrylic Experience".to_string(),
                    sales: 31,
                    revenue_cents: 133_269,
                },
                KitStats {
                    title: "Beginner Watercolor Basics".to_string(),
                    sales: 13,
                    revenue_cents: 32_487,
                },
            ],
            artist_stats: ArtistStats {
                total_earnings_cents: 323_211,
                total_sales: 89,
                active_kits: 3,
                followers: 1834,
                monthly_growth_pct: 12,
            },
        }
    }
}

fn category(id: &str, title: &str, subtitle: &str, tag: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        tag: tag.to_string(),
    }
}

/// Generates an order number in the mockup's "AD" + 6 base-36 format.
///
/// Seeded from the wall clock; there is no uniqueness requirement beyond
/// looking plausible on screen.
pub fn order_number() -> String {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    order_number_from(seed)
}

/// Deterministic order-number body used by [`order_number`].
pub fn order_number_from(seed: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    // One multiplicative mix so adjacent seeds do not share prefixes.
    let mut value = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut body = String::with_capacity(8);
    body.push_str("AD");
    for _ in 0..6 {
        body.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.product(1).unwrap().title, "Watercolor Sunset Kit");
        assert!(catalog.product(999).is_none());
    }

    #[test]
    fn test_products_in_category() {
        let catalog = Catalog::default();
        let girls_night = catalog.products_in(Some("girls-night"));
        assert_eq!(girls_night.len(), 2);
        assert!(girls_night.iter().all(|p| p.category == "girls-night"));
        assert_eq!(catalog.products_in(None).len(), catalog.products.len());
        assert!(catalog.products_in(Some("no-such-category")).is_empty());
    }

    #[test]
    fn test_cart_subtotal_skips_unknown_products() {
        let catalog = Catalog::default();
        let items = vec![
            CartItem { product_id: 1, quantity: 1 },  // 3499
            CartItem { product_id: 3, quantity: 2 },  // 5798
            CartItem { product_id: 999, quantity: 5 }, // ignored
        ];
        assert_eq!(catalog.cart_subtotal_cents(&items), 9297);
    }

    #[test]
    fn test_shipping_is_free_over_threshold() {
        let catalog = Catalog::default();
        let big = vec![
            CartItem { product_id: 1, quantity: 1 },
            CartItem { product_id: 3, quantity: 2 },
        ];
        let summary = catalog.price_order(&big);
        assert_eq!(summary.subtotal_cents, 9297);
        assert_eq!(summary.shipping_cents, 0);

        let small = vec![CartItem { product_id: 1, quantity: 1 }];
        let summary = catalog.price_order(&small);
        assert_eq!(summary.subtotal_cents, 3499);
        assert_eq!(summary.shipping_cents, SHIPPING_FEE_CENTS);
    }

    #[test]
    fn test_price_order_totals_add_up() {
        let catalog = Catalog::default();
        let items = vec![CartItem { product_id: 2, quantity: 1 }];
        let summary = catalog.price_order(&items);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].title, "Abstract Acrylic Experience");
        assert_eq!(summary.tax_cents, 4299 * TAX_RATE_PCT / 100);
        assert_eq!(
            summary.total_cents,
            summary.subtotal_cents + summary.shipping_cents + summary.tax_cents
        );
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let catalog = Catalog::default();
        let summary = catalog.price_order(&[]);
        assert_eq!(summary.total_cents, 0);
        assert_eq!(summary.shipping_cents, 0);
        assert!(summary.lines.is_empty());
    }

    #[test]
    fn test_order_number_format() {
        let number = order_number_from(42);
        assert_eq!(number.len(), 8);
        assert!(number.starts_with("AD"));
        assert!(number[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        // Deterministic for a fixed seed.
        assert_eq!(order_number_from(42), number);
        assert_ne!(order_number_from(43), number);
    }

    #[test]
    fn test_assigned_driver() {
        let catalog = Catalog::default();
        assert_eq!(catalog.assigned_driver().unwrap().initials, "MR");
    }
}
