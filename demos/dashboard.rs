//! Terminal rendition of the dashboard: top list in two orders, then one
//! asset's detail screen.
//!
//! Reads `COINGECKO_*` overrides from the environment or a `.env` file.
//!
//! ```bash
//! cargo run --example dashboard --features native -- ethereum
//! ```

use crypto_dashboard::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let id = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());
    let client = CoinGeckoClient::builder().from_env()?.build()?;

    // ── List screen ──────────────────────────────────────────────────────
    let list = client.list_coordinator();
    list.load().await;
    print_list(list.sort_order().await, &list.quotes().current().await);

    list.change_sort(SortOrder::for_tab(1)).await;
    print_list(list.sort_order().await, &list.quotes().current().await);

    // ── Detail screen ────────────────────────────────────────────────────
    let detail = client.detail_coordinator();
    detail.load(id.as_str()).await;

    match detail.detail().current().await {
        LoadState::Success(quote) => println!(
            "\n{} ({}) {}  {}",
            quote.name,
            quote.symbol.to_uppercase(),
            format_price(quote.current_price),
            format_percentage(quote.price_change_percentage_24h)
        ),
        LoadState::Failure(message) => println!("\n{}: {}", id, message),
        LoadState::Pending => println!("\n{}: loading", id),
    }

    for window in [TimeWindow::Day7, TimeWindow::Day30] {
        detail.change_window(window).await;
        match detail.history().current().await {
            LoadState::Success(history) => match history.stats() {
                Some(stats) => println!(
                    "  {:>4}: {} → {} ({}), range {} – {}",
                    window.to_string(),
                    format_price(stats.start),
                    format_price(stats.current),
                    format_percentage(stats.change_percent),
                    format_price(stats.min),
                    format_price(stats.max)
                ),
                None => println!("  {:>4}: no data", window.to_string()),
            },
            LoadState::Failure(message) => println!("  {:>4}: {}", window.to_string(), message),
            LoadState::Pending => println!("  {:>4}: loading", window.to_string()),
        }
    }

    match detail.pairs().current().await {
        LoadState::Success(pairs) => {
            for pair in pairs {
                println!(
                    "  {:<14} {:>14}  vol {:.0}",
                    pair.symbol,
                    format_price(pair.price),
                    pair.volume_24h
                );
            }
        }
        LoadState::Failure(message) => println!("  pairs: {}", message),
        LoadState::Pending => println!("  pairs: loading"),
    }

    Ok(())
}

fn print_list(order: SortOrder, state: &LoadState<Vec<Quote>>) {
    println!("\n== {} ==", order.display_name());
    match state {
        LoadState::Success(quotes) => {
            for quote in quotes {
                let rank = quote
                    .market_cap_rank
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>4}  {:<8} {:>16}  {:>8}",
                    rank,
                    quote.symbol.to_uppercase(),
                    format_price(quote.current_price),
                    format_percentage(quote.price_change_percentage_24h)
                );
            }
        }
        LoadState::Failure(message) => println!("{}", message),
        LoadState::Pending => println!("loading"),
    }
}
