//! Screen rendering for the ArtDrop terminal mockup.
//!
//! [`render_ui`] lays out the frame as header, body and footer, then
//! dispatches on the current screen tag to the matching render function.
//! Tags without a dedicated view fall through to a placeholder, never an
//! error. All rendering reads the app state; nothing here mutates it.

use crate::application::{form_field_labels, App, Tab};
use crate::domain::{format_price, format_rating, Payload, Product, ScreenId, UserType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Interests offered on the personalization screen.
pub const INTERESTS: [&str; 6] = [
    "Watercolor",
    "Acrylic",
    "Oil Painting",
    "Sketching",
    "Crafts",
    "Digital Art",
];

/// Onboarding carousel pages.
pub const ONBOARDING_PAGES: [(&str, &str); 3] = [
    (
        "Discover Art Kits",
        "Curated painting and craft kits from independent artists,\nmatched to your night in.",
    ),
    (
        "Delivered To Your Door",
        "Same-day delivery with live tracking, from the studio\nstraight to your table.",
    ),
    (
        "Create With Artists",
        "Every kit includes step-by-step video guidance from the\nartist who designed it.",
    ),
];

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_screen(f, app, chunks[1]);
    if app.show_bottom_tabs() {
        render_tab_bar(f, app, chunks[2]);
    } else {
        render_status_bar(f, app, chunks[2]);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let screen = app.current_screen();
    let header = Paragraph::new(format!(
        "ArtDrop | {} (history: {})",
        screen.title(),
        app.navigator.depth()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

/// Pure tag-to-view dispatch. The ad-hoc tags of the original (search,
/// events, order-details) take the fallback arm.
fn render_screen(f: &mut Frame, app: &App, area: Rect) {
    match app.current_screen() {
        ScreenId::Loading => render_loading(f, area),
        ScreenId::Onboarding => render_onboarding(f, app, area),
        ScreenId::Login | ScreenId::Signup => render_credentials(f, app, area),
        ScreenId::Personalization => render_personalization(f, app, area),
        ScreenId::Home => render_home(f, app, area),
        ScreenId::Browse => render_browse(f, app, area),
        ScreenId::Product => render_product(f, app, area),
        ScreenId::Cart => render_cart(f, app, area),
        ScreenId::Checkout => render_checkout(f, app, area),
        ScreenId::Payment => render_payment(f, app, area),
        ScreenId::OrderPlaced => render_order_placed(f, app, area),
        ScreenId::DriverAssigned => render_driver_assigned(f, app, area),
        ScreenId::DriverOnWay => render_driver_on_way(f, app, area),
        ScreenId::DriverArriving => render_driver_arriving(f, app, area),
        ScreenId::DeliveryComplete => render_delivery_complete(f, app, area),
        ScreenId::Confirmation => render_confirmation(f, app, area),
        ScreenId::Profile => render_profile(f, app, area),
        ScreenId::Reels => render_reels(f, app, area),
        ScreenId::Messages => render_messages(f, app, area),
        ScreenId::ArtistDashboard => render_artist_dashboard(f, app, area),
        ScreenId::ArtistAnalytics => render_artist_analytics(f, app, area),
        _ => render_fallback(f, app, area),
    }
}

fn render_loading(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A r t D r o p",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Art delivered to your door"),
        Line::from(""),
        Line::from(Span::styled("Loading...", Style::default().fg(Color::DarkGray))),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_onboarding(f: &mut Frame, app: &App, area: Rect) {
    let page = app.screen.page.min(ONBOARDING_PAGES.len() - 1);
    let (title, body) = ONBOARDING_PAGES[page];
    let dots: String = (0..ONBOARDING_PAGES.len())
        .map(|i| if i == page { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(body.lines().map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        dots,
        Style::default().fg(Color::Magenta),
    )));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Welcome to ArtDrop"));
    f.render_widget(widget, area);
}

fn render_credentials(f: &mut Frame, app: &App, area: Rect) {
    let screen = app.current_screen();
    let labels = form_field_labels(screen);
    let mut lines = vec![Line::from("")];
    for (i, label) in labels.iter().enumerate() {
        let value = app.screen.inputs.get(i).map(String::as_str).unwrap_or("");
        // The password field is always last on these forms.
        let shown = if i == labels.len() - 1 {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        lines.push(form_field_line(label, &shown, i == app.screen.focus));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  Role: "),
        role_span("Buyer", app.screen.role_pick == UserType::Buyer),
        Span::raw("  "),
        role_span("Artist", app.screen.role_pick == UserType::Artist),
    ]));
    lines.push(Line::from(""));
    let submit_style = if app.can_submit_credentials() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let action = if screen == ScreenId::Login { "Sign In" } else { "Create Account" };
    lines.push(Line::from(Span::styled(
        format!("  [ {} ] (Enter)", action),
        submit_style,
    )));
    let title = if screen == ScreenId::Login {
        "Log in to ArtDrop"
    } else {
        "Join ArtDrop"
    };
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn role_span(label: &str, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(format!(" {} ", label))
    }
}

fn form_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{}{:<18}", marker, format!("{}:", label)), style),
        Span::styled(
            format!("{}{}", value, if focused { "_" } else { "" }),
            style,
        ),
    ])
}

fn render_personalization(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = INTERESTS
        .iter()
        .enumerate()
        .map(|(i, interest)| {
            let picked = app.screen.picks.contains(&i);
            let marker = if picked { "[x]" } else { "[ ]" };
            let style = if i == app.screen.cursor {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else if picked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} {}", marker, interest)).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("What do you love to make?"),
    );
    f.render_widget(list, area);
}

fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let featured: Vec<&Product> = app.catalog.products.iter().take(2).collect();
    let mut items: Vec<ListItem> = Vec::new();
    items.push(section_item("Shop by Vibe"));
    for (i, category) in app.catalog.categories.iter().enumerate() {
        let line = format!(
            " {:<20} {:<24} {}",
            category.title, category.subtitle, category.tag
        );
        items.push(cursor_item(line, i == app.screen.cursor));
    }
    items.push(section_item("Featured Kits"));
    for (i, kit) in featured.iter().enumerate() {
        let line = format!(
            " {:<28} {:<16} {:<8} ★{}",
            kit.title,
            kit.artist,
            format_price(kit.price_cents),
            format_rating(kit.rating_tenths)
        );
        items.push(cursor_item(
            line,
            app.catalog.categories.len() + i == app.screen.cursor,
        ));
    }
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Discover"));
    f.render_widget(list, area);
}

fn section_item(title: &str) -> ListItem<'static> {
    ListItem::new(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    ))
}

fn cursor_item(line: String, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };
    ListItem::new(line).style(style)
}

/// Category filter for the browse screen, read from the payload; any
/// other payload variant means "all kits".
fn browse_category(app: &App) -> Option<String> {
    match app.navigator.payload() {
        Payload::Browse { category } => category.clone(),
        _ => None,
    }
}

fn render_browse(f: &mut Frame, app: &App, area: Rect) {
    let category = browse_category(app);
    let kits = app.catalog.products_in(category.as_deref());
    let items: Vec<ListItem> = kits
        .iter()
        .enumerate()
        .map(|(i, kit)| {
            let line = format!(
                " {:<28} {:<16} {:<8} ★{}  {}",
                kit.title,
                kit.artist,
                format_price(kit.price_cents),
                format_rating(kit.rating_tenths),
                kit.difficulty
            );
            cursor_item(line, i == app.screen.cursor)
        })
        .collect();
    let title = match &category {
        Some(c) => format!("Browse: {}", c),
        None => "Browse All Kits".to_string(),
    };
    if items.is_empty() {
        let empty = Paragraph::new("No kits in this category yet.")
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
    } else {
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, area);
    }
}

/// The kit shown on the product screen. An unexpected payload or an
/// unknown id falls back to the first kit, as the original did.
fn product_for_screen(app: &App) -> Option<&Product> {
    let id = match app.navigator.payload() {
        Payload::Product { product_id } => Some(*product_id),
        _ => None,
    };
    id.and_then(|id| app.catalog.product(id))
        .or_else(|| app.catalog.products.first())
}

fn render_product(f: &mut Frame, app: &App, area: Rect) {
    let Some(kit) = product_for_screen(app) else {
        render_fallback(f, app, area);
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            kit.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "by {}  ★{} ({} difficulty)",
            kit.artist,
            format_rating(kit.rating_tenths),
            kit.difficulty
        )),
        Line::from(Span::styled(
            format_price(kit.price_cents),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(kit.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Includes:",
            Style::default().fg(Color::Magenta),
        )),
    ];
    for item in &kit.includes {
        lines.push(Line::from(format!("  - {}", item)));
    }
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Kit Details"));
    f.render_widget(widget, area);
}

fn render_cart(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let added = match app.navigator.payload() {
        Payload::AddedToCart { product_id } => Some(*product_id),
        _ => None,
    };
    let mut items: Vec<ListItem> = Vec::new();
    if let Some(kit) = added.and_then(|id| app.catalog.product(id)) {
        items.push(ListItem::new(Span::styled(
            format!(" Added to cart: {}", kit.title),
            Style::default().fg(Color::Green),
        )));
    }
    for (i, item) in app.cart.iter().enumerate() {
        let Some(kit) = app.catalog.product(item.product_id) else {
            continue;
        };
        let line = format!(
            " {:<28} x{:<3} {:>8}",
            kit.title,
            item.quantity,
            format_price(kit.price_cents * item.quantity)
        );
        items.push(cursor_item(line, i == app.screen.cursor));
    }
    if app.cart.is_empty() {
        items.push(ListItem::new(" Your cart is empty. Browse kits to get started."));
    }
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Your Cart"));
    f.render_widget(list, chunks[0]);

    let summary = app.catalog.price_order(&app.cart);
    let shipping_line = if summary.subtotal_cents == 0 {
        "Shipping: -".to_string()
    } else if summary.shipping_cents == 0 {
        "Shipping: Free!".to_string()
    } else {
        format!(
            "Shipping: {} (free over {})",
            format_price(summary.shipping_cents),
            format_price(crate::domain::FREE_SHIPPING_THRESHOLD_CENTS)
        )
    };
    let lines = vec![
        Line::from(format!("Subtotal: {}", format_price(summary.subtotal_cents))),
        Line::from(shipping_line),
        Line::from(format!("Tax: {}", format_price(summary.tax_cents))),
        Line::from(Span::styled(
            format!("Total: {}", format_price(summary.total_cents)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Summary"));
    f.render_widget(widget, chunks[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect, title: &str, submit: &str, enabled: bool) {
    let labels = form_field_labels(app.current_screen());
    let mut lines = vec![Line::from("")];
    for (i, label) in labels.iter().enumerate() {
        let value = app.screen.inputs.get(i).map(String::as_str).unwrap_or("");
        lines.push(form_field_line(label, value, i == app.screen.focus));
    }
    lines.push(Line::from(""));
    let style = if enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(
        format!("  [ {} ] (Enter)", submit),
        style,
    )));
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(widget, area);
}

fn render_checkout(f: &mut Frame, app: &App, area: Rect) {
    let complete = app.screen.inputs.iter().all(|s| !s.is_empty());
    render_form(f, app, area, "Delivery Address", "Continue to Payment", complete);
}

fn render_payment(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);
    render_form(
        f,
        app,
        chunks[0],
        "Payment",
        "Place Order",
        app.can_submit_payment(),
    );
    let summary = app.catalog.price_order(&app.cart);
    let lines = vec![
        Line::from(format!(
            "Subtotal {}   Shipping {}   Tax {}",
            format_price(summary.subtotal_cents),
            format_price(summary.shipping_cents),
            format_price(summary.tax_cents)
        )),
        Line::from(Span::styled(
            format!("Order total: {}", format_price(summary.total_cents)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Order Summary"));
    f.render_widget(widget, chunks[1]);
}

fn order_number_line(app: &App) -> Line<'static> {
    let number = app
        .navigator
        .payload()
        .order_number()
        .unwrap_or("AD123456")
        .to_string();
    Line::from(vec![
        Span::raw("Order "),
        Span::styled(number, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
    ])
}

fn render_order_placed(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Order placed!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        order_number_line(app),
        Line::from(""),
    ];
    if let Some(summary) = app.navigator.payload().order_summary() {
        for line in &summary.lines {
            lines.push(Line::from(format!(
                "{} x{}  {}",
                line.title,
                line.quantity,
                format_price(line.price_cents * line.quantity)
            )));
        }
        lines.push(Line::from(format!(
            "Total {}",
            format_price(summary.total_cents)
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Finding your delivery driver...",
        Style::default().fg(Color::DarkGray),
    )));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Order Placed"));
    f.render_widget(widget, area);
}

fn driver_card_lines(app: &App) -> Vec<Line<'static>> {
    let driver = app
        .navigator
        .payload()
        .driver()
        .cloned()
        .or_else(|| app.catalog.assigned_driver().cloned());
    match driver {
        Some(d) => vec![
            Line::from(vec![
                Span::styled(
                    format!("({}) ", d.initials),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(d.name, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(format!(
                "★{} · {} deliveries",
                format_rating(d.rating_tenths),
                d.deliveries
            )),
            Line::from(format!("{} · {}", d.vehicle, d.plate)),
        ],
        None => vec![Line::from("Assigning a driver...")],
    }
}

/// Packing stage copy, keyed to the progress bar.
fn packing_stage(progress_pct: u16) -> &'static str {
    if progress_pct < 50 {
        "Gathering your art supplies..."
    } else if progress_pct < 80 {
        "Packing your kit with care..."
    } else if progress_pct < 100 {
        "Adding finishing touches..."
    } else {
        "Ready for pickup!"
    }
}

fn render_driver_assigned(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    let card = Paragraph::new(driver_card_lines(app))
        .block(Block::default().borders(Borders::ALL).title("Your Driver"));
    f.render_widget(card, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Packing Your Order"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(app.screen.progress_pct.min(100));
    f.render_widget(gauge, chunks[1]);

    let lines = vec![
        Line::from(packing_stage(app.screen.progress_pct)),
        Line::from(""),
        order_number_line(app),
        Line::from(format!(
            "Estimated pickup: {}",
            if app.screen.progress_pct < 100 { "15-20 minutes" } else { "5 minutes" }
        )),
    ];
    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);
}

fn render_driver_on_way(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    let card = Paragraph::new(driver_card_lines(app))
        .block(Block::default().borders(Borders::ALL).title("On The Way"));
    f.render_widget(card, chunks[0]);

    let eta = app.screen.eta_minutes;
    let miles = f64::from(eta) * 0.13;
    let lines = vec![
        Line::from(Span::styled(
            format!("{} min away", eta),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{:.1} miles from you", miles)),
        Line::from(""),
        order_number_line(app),
        Line::from(""),
        Line::from(Span::styled(
            "Your kit is on its way. We'll let you know when the driver is close.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Live Tracking"));
    f.render_widget(widget, chunks[1]);
}

fn render_driver_arriving(f: &mut Frame, app: &App, area: Rect) {
    let countdown = app.screen.countdown;
    let minutes = if countdown == 1 { "minute" } else { "minutes" };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your driver is arriving!",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("ETA: {} {}", countdown, minutes)),
        Line::from(""),
    ];
    lines.extend(driver_card_lines(app));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Your driver will ring the doorbell and leave the package at your door.",
        Style::default().fg(Color::DarkGray),
    )));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Almost There"));
    f.render_widget(widget, area);
}

fn render_delivery_complete(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Delivered!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        order_number_line(app),
        Line::from(""),
    ];
    lines.extend(driver_card_lines(app));
    lines.push(Line::from(""));
    lines.push(Line::from("Time to get creative. Enjoy your kit!"));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Delivered"));
    f.render_widget(widget, area);
}

fn render_confirmation(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you!",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        order_number_line(app),
        Line::from(""),
        Line::from("We'd love to see what you make. Tag @artdrop to be featured."),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Confirmation"));
    f.render_widget(widget, area);
}

/// Static profile menu entries.
pub const PROFILE_MENU: [&str; 4] = [
    "Order History",
    "Payment Methods",
    "Delivery Addresses",
    "Settings",
];

fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    let lines = vec![
        Line::from(Span::styled(
            "Sarah Johnson",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("sarah@example.com · Member since 2024"),
    ];
    let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Profile"));
    f.render_widget(card, chunks[0]);

    let items: Vec<ListItem> = PROFILE_MENU
        .iter()
        .enumerate()
        .map(|(i, entry)| cursor_item(format!(" {}", entry), i == app.screen.cursor))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Account"));
    f.render_widget(list, chunks[1]);
}

fn render_reels(f: &mut Frame, app: &App, area: Rect) {
    let reels = &app.catalog.reels;
    if reels.is_empty() {
        let empty = Paragraph::new("No reels yet.")
            .block(Block::default().borders(Borders::ALL).title("Reels"));
        f.render_widget(empty, area);
        return;
    }
    let index = app.screen.page.min(reels.len() - 1);
    let reel = &reels[index];
    let liked = app.screen.liked.contains(&index);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                reel.artist.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", reel.handle),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(reel.caption.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} {}", if liked { "♥" } else { "♡" }, app.reel_likes(index)),
                if liked {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                },
            ),
            Span::raw(format!("    reel {}/{}", index + 1, reels.len())),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Featured kit: "),
            Span::styled(
                reel.kit_title.clone(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reels"));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .conversations
        .iter()
        .enumerate()
        .map(|(i, convo)| {
            let unread = if convo.unread > 0 {
                format!(" ({} new)", convo.unread)
            } else {
                String::new()
            };
            let line = format!(
                " {:<16} {:<36} {}{}",
                convo.name, convo.last_message, convo.time, unread
            );
            let mut item = cursor_item(line, i == app.screen.cursor);
            if convo.unread > 0 && i != app.screen.cursor {
                item = item.style(Style::default().add_modifier(Modifier::BOLD));
            }
            item
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Messages"));
    f.render_widget(list, area);
}

fn render_artist_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    let stats = &app.catalog.artist_stats;
    let lines = vec![
        Line::from(vec![
            Span::raw("Total earnings: "),
            Span::styled(
                format_price(stats.total_earnings_cents),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  +{}% this month", stats.monthly_growth_pct),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(format!(
            "{} sales · {} active kits · {} followers",
            stats.total_sales, stats.active_kits, stats.followers
        )),
    ];
    let card =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Your Studio"));
    f.render_widget(card, chunks[0]);

    let items: Vec<ListItem> = app
        .catalog
        .kit_stats
        .iter()
        .enumerate()
        .map(|(i, kit)| {
            let line = format!(
                " {:<30} {:>4} sales {:>12}",
                kit.title,
                kit.sales,
                format_price(kit.revenue_cents)
            );
            cursor_item(line, i == app.screen.cursor)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Your Kits"));
    f.render_widget(list, chunks[1]);
}

fn render_artist_analytics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.catalog.artist_stats;
    let total: u32 = app
        .catalog
        .kit_stats
        .iter()
        .map(|k| k.revenue_cents)
        .sum::<u32>()
        .max(1);
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(app.catalog.kit_stats.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Paragraph::new(format!(
        "Revenue by kit · {} lifetime",
        format_price(stats.total_earnings_cents)
    ))
    .block(Block::default().borders(Borders::ALL).title("Analytics"));
    f.render_widget(header, chunks[0]);

    for (i, kit) in app.catalog.kit_stats.iter().enumerate() {
        let share = (kit.revenue_cents as u64 * 100 / total as u64) as u16;
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(kit.title.clone()))
            .gauge_style(Style::default().fg(Color::Magenta))
            .percent(share.min(100))
            .label(format!("{} ({} sales)", format_price(kit.revenue_cents), kit.sales));
        f.render_widget(gauge, chunks[i + 1]);
    }
}

/// Default view for tags without a dedicated screen.
fn render_fallback(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.current_screen().title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("This screen is a placeholder in the mockup."),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Coming Soon"));
    f.render_widget(widget, area);
}

fn render_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let label = if *tab == Tab::Cart && app.cart_count() > 0 {
            format!(" {}:{} ({}) ", i + 1, tab.label(), app.cart_count())
        } else {
            format!(" {}:{} ", i + 1, tab.label())
        };
        let style = if *tab == app.current_tab {
            Style::default().bg(Color::Magenta).fg(Color::White)
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Tabs"));
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match &app.status_message {
        Some(message) => message.clone(),
        None => screen_hint(app.current_screen()).to_string(),
    };
    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(widget, area);
}

/// Per-screen key hints shown in the status bar.
fn screen_hint(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Loading => "Loading ArtDrop...",
        ScreenId::Onboarding => "←/→: pages | Enter: log in | s: sign up | q: quit",
        ScreenId::Login | ScreenId::Signup => {
            "↑↓/Tab: field | ←/→: role | Enter: submit | Esc: back"
        }
        ScreenId::Personalization => "↑↓: move | Space: toggle | Enter: continue",
        ScreenId::Home => "↑↓: move | Enter: open | b: browse all | q: quit",
        ScreenId::Browse => "↑↓: move | Enter: kit details | Esc: back",
        ScreenId::Product => "Enter: add to cart | Esc: back",
        ScreenId::Cart => "↑↓: move | +/-: quantity | Enter: checkout | Esc: back",
        ScreenId::Checkout => "↑↓/Tab: field | Enter: continue | Esc: back",
        ScreenId::Payment => "↑↓/Tab: field | Enter: place order | Esc: back",
        ScreenId::OrderPlaced
        | ScreenId::DriverAssigned
        | ScreenId::DriverOnWay
        | ScreenId::DriverArriving => "Enter: skip ahead | Esc: back | h: home",
        ScreenId::DeliveryComplete => "Enter: continue | h: home",
        ScreenId::Confirmation => "Enter: back to home",
        ScreenId::Profile => "↑↓: move | Esc: back | q: quit",
        ScreenId::Reels => "↑↓: next reel | l: like | Enter: featured kit",
        ScreenId::Messages => "↑↓: move | Esc: back",
        ScreenId::ArtistDashboard => "↑↓: move | a: analytics | q: quit",
        ScreenId::ArtistAnalytics => "Esc: back | q: quit",
        _ => "Esc: back | Enter: home",
    }
}
