//! # Ace Kiosk Library
//!
//! Terminal ordering kiosk for the Ace Restaurant demo.
//!
//! ## Module Organization
//! ```text
//! ace_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & REPL)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Fail-safe menu asset loading
//! │   ├── cart.rs     ◄─── Cart state + totals watch channel
//! │   └── config.rs   ◄─── Session configuration (ACE_* env vars)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Tabs, item lists, search + suggestions
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Place-order gate
//! ├── debounce.rs     ◄─── Last-query-wins delayed evaluation
//! └── error.rs        ◄─── API error surface
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (env-filter, default `info`)
//! 2. Resolve configuration from `ACE_*` environment variables
//! 3. Load the bundled menu asset (fail-safe: empty catalog on error)
//! 4. Create session state (catalog, cart, config)
//! 5. Subscribe a debug logger to cart totals changes
//! 6. Run the REPL until `quit` or EOF

pub mod commands;
pub mod debounce;
pub mod error;
pub mod state;

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ace_core::{CheckoutForm, LineOptions, MenuItem, Money};

use commands::cart::{AddToCartRequest, CartResponse};
use debounce::Debouncer;
use state::{CartState, CatalogState, ConfigState};

/// Runs the kiosk until `quit` or end of input.
pub async fn run() {
    init_tracing();
    info!("Starting Ace Restaurant kiosk");

    let config = ConfigState::from_env();
    let catalog = Arc::new(CatalogState::load());
    let cart = Arc::new(CartState::new(config.tax_rate()));

    // Publish-on-change observer: log every totals update at debug level
    let mut totals_rx = cart.subscribe();
    tokio::spawn(async move {
        while totals_rx.changed().await.is_ok() {
            let totals = *totals_rx.borrow_and_update();
            debug!(
                lines = totals.line_count,
                total = %Money::from_cents(totals.total_cents),
                "cart totals changed"
            );
        }
    });

    let mut search = Debouncer::new(config.search_debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Welcome to Ace Restaurant. Type 'help' for commands.");
    loop {
        prompt("> ");
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "menu" => show_menu(&catalog),
            "items" => show_items(&catalog, rest),
            "search" => schedule_search(&mut search, &catalog, rest),
            "show" => show_item(&catalog, rest),
            "add" => add_item(&catalog, &cart, rest),
            "cart" => print_cart(&commands::cart::get_cart(&cart)),
            "remove" => mutate_line(&cart, rest, commands::cart::remove_line),
            "plus" => mutate_line(&cart, rest, commands::cart::increment_line),
            "minus" => mutate_line(&cart, rest, commands::cart::decrement_line),
            "clear" => print_cart(&commands::cart::clear_cart(&cart)),
            "checkout" => checkout(&mut lines, &cart, &config).await,
            "quit" | "exit" => break,
            _ => println!("Unknown command '{command}'. Type 'help' for commands."),
        }
    }

    info!("Kiosk session ended");
}

/// Initializes tracing with `RUST_LOG` override support.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "\
Commands:
  menu                     show category tabs
  items <category>         list items ('all' for everything)
  search <query>           search names/descriptions (debounced)
  show <item-id>           item details and options
  add <item-id> [qty=N] [size=S] [crust=C] [topping=T] [notes=\"...\"]
  cart                     show cart lines and totals
  remove|plus|minus <n>    edit cart line n
  clear                    empty the cart
  checkout                 enter payment and delivery details
  quit"
    );
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

fn show_menu(catalog: &CatalogState) {
    let categories = commands::menu::list_categories(catalog);
    if categories.is_empty() {
        println!("The menu is empty.");
        return;
    }
    for category in categories {
        let count = commands::menu::list_items(catalog, &category.id).len();
        println!("  {:<12} {} items  (items {})", category.title, count, category.id);
    }
}

fn show_items(catalog: &CatalogState, category_id: &str) {
    let id = if category_id.is_empty() { "all" } else { category_id };
    let items = commands::menu::list_items(catalog, id);
    if items.is_empty() {
        println!("No items in '{id}'.");
        return;
    }
    for item in items {
        println!("  [{}] {:<22} {}", item.id, item.name, item.price);
    }
}

/// Schedules a debounced search over the full catalog; only the latest
/// query runs.
fn schedule_search(search: &mut Debouncer, catalog: &Arc<CatalogState>, query: &str) {
    let catalog = Arc::clone(catalog);
    let query = query.to_string();
    search.schedule(async move {
        let response = commands::menu::search_menu(&catalog, "all", &query);
        if response.items.is_empty() {
            if response.suggestions.is_empty() {
                println!("No items match.");
            } else {
                println!("No items match. Did you mean: {}?", response.suggestions.join(", "));
            }
        } else {
            for item in &response.items {
                println!("  [{}] {:<22} {}", item.id, item.name, item.price);
            }
        }
        prompt("> ");
    });
}

fn show_item(catalog: &CatalogState, id: &str) {
    match commands::menu::get_item(catalog, id) {
        Ok(item) => print_item_detail(&item),
        Err(err) => println!("{err}"),
    }
}

fn print_item_detail(item: &MenuItem) {
    println!("{} — {}", item.name, item.price);
    println!("  {}", item.description);
    if let Some(sizes) = &item.sizes {
        println!("  sizes: {}", sizes.join(", "));
    }
    if let Some(crusts) = &item.crusts {
        println!("  crusts: {}", crusts.join(", "));
    }
    if let Some(toppings) = &item.toppings {
        println!("  toppings: {}", toppings.join(", "));
    }
}

fn add_item(catalog: &CatalogState, cart: &CartState, args: &str) {
    let tokens = split_args(args);
    let Some(item_id) = tokens.first() else {
        println!("Usage: add <item-id> [qty=N] [size=S] [crust=C] [topping=T] [notes=\"...\"]");
        return;
    };

    let mut request = AddToCartRequest {
        item_id: item_id.clone(),
        quantity: 1,
        options: LineOptions::default(),
    };
    for token in &tokens[1..] {
        let Some((key, value)) = token.split_once('=') else {
            println!("Ignoring '{token}' (expected key=value)");
            continue;
        };
        match key {
            "qty" => match value.parse::<i64>() {
                Ok(qty) if qty >= 1 => request.quantity = qty,
                _ => println!("Ignoring qty '{value}'"),
            },
            "size" => request.options.size = Some(value.to_string()),
            "crust" => request.options.crust = Some(value.to_string()),
            "topping" => request.options.topping = Some(value.to_string()),
            "notes" => request.options.notes = Some(value.to_string()),
            _ => println!("Ignoring unknown option '{key}'"),
        }
    }

    match commands::cart::add_to_cart(catalog, cart, request) {
        Ok(response) => print_cart(&response),
        Err(err) => println!("{err}"),
    }
}

fn mutate_line(cart: &CartState, arg: &str, op: fn(&CartState, usize) -> CartResponse) {
    // UI indices are 1-based; out-of-range becomes a cart-level no-op
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => print_cart(&op(cart, n - 1)),
        _ => println!("Expected a line number, e.g. 'remove 1'."),
    }
}

fn print_cart(response: &CartResponse) {
    if response.lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for (i, line) in response.lines.iter().enumerate() {
        let mut extras = Vec::new();
        if let Some(size) = &line.selected_size {
            extras.push(size.clone());
        }
        if let Some(crust) = &line.selected_crust {
            extras.push(format!("{crust} crust"));
        }
        if let Some(topping) = &line.selected_topping {
            extras.push(topping.clone());
        }
        if let Some(notes) = &line.notes {
            if !notes.is_empty() {
                extras.push(format!("\"{notes}\""));
            }
        }
        let detail = if extras.is_empty() {
            String::new()
        } else {
            format!("  ({})", extras.join(", "))
        };
        println!(
            "  {}. {:<22} x{:<3} {}{}",
            i + 1,
            line.name,
            line.quantity,
            line.line_total(),
            detail
        );
    }
    let totals = &response.totals;
    println!("  Subtotal:   {}", Money::from_cents(totals.subtotal_cents));
    println!("  Tax & Fees: {}", Money::from_cents(totals.tax_cents));
    println!("  Total:      {}", Money::from_cents(totals.total_cents));
}

/// Prompts for the checkout fields, then runs the place-order gate.
async fn checkout(lines: &mut Lines<BufReader<Stdin>>, cart: &CartState, config: &ConfigState) {
    if cart.with_cart(|c| c.is_empty()) {
        println!("Your cart is empty.");
        return;
    }

    let mut form = CheckoutForm::default();
    form.card_name = read_field(lines, "Name on card: ").await;

    // Card number and expiry echo back masked, the way the on-screen
    // fields format while typing
    let raw = read_field(lines, "Card number: ").await;
    let edit = ace_core::checkout::format_card_number(&raw, raw.chars().count(), false);
    form.card_number = edit.text;
    println!("  [{}]", form.card_number);

    let raw = read_field(lines, "Expiry (MM/YY): ").await;
    form.expiry = ace_core::checkout::format_expiry(&raw);

    form.cvv = read_field(lines, "CVV: ").await;
    form.billing_zip = read_field(lines, "Billing ZIP: ").await;
    form.first_name = read_field(lines, "First name: ").await;
    form.last_name = read_field(lines, "Last name: ").await;
    form.address1 = read_field(lines, "Address: ").await;
    form.city = read_field(lines, "City: ").await;
    form.state = read_field(lines, "State: ").await;
    form.shipping_zip = read_field(lines, "ZIP code: ").await;

    match commands::checkout::place_order(cart, config, &form) {
        Ok(confirmation) => {
            println!("Thanks, {}! Your order has been placed.", confirmation.customer_name);
            println!("Order #{}", confirmation.order_id);
            println!("Estimated delivery: {}", confirmation.eta_text);
        }
        Err(err) => println!("{err}"),
    }
}

async fn read_field(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> String {
    prompt(label);
    match lines.next_line().await {
        Ok(Some(line)) => line.trim().to_string(),
        _ => String::new(),
    }
}

/// Splits command arguments, honoring double quotes so option values can
/// contain spaces: `add en1 topping="Extra cheese"`.
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        args.push(current);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_args_plain() {
        assert_eq!(split_args("en1 qty=2 size=Large"), vec!["en1", "qty=2", "size=Large"]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_split_args_quoted_values() {
        assert_eq!(
            split_args(r#"en1 topping="Extra cheese" notes="no onions please""#),
            vec!["en1", "topping=Extra cheese", "notes=no onions please"]
        );
    }
}
