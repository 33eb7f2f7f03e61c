//! `ticker-watch`: poll the quote and trade feeds and print every change.
//!
//! Usage: `ticker-watch [config.toml]`. Settings can also come from `TICKER_*`
//! environment variables; log level from `RUST_LOG` (default `info`).

use investor_ticker::prelude::*;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

const REDRAW_CHECK: Duration = Duration::from_secs(1);

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();
}

fn print_quote(display: &QuoteDisplay, chart: &ChartView) {
    println!();
    println!("{}  {}  {}", display.symbol, display.price, display.change_line());
    println!(
        "  open {}  day {}  52w {}  prev close {}",
        display.open, display.day_range, display.week_52_range, display.previous_close
    );
    println!(
        "  volume {}  avg {}  mkt cap {}  shares {}",
        display.volume, display.average_volume, display.market_cap, display.listed_shares
    );
    println!(
        "  bid {} x {}  ask {} x {}",
        display.bid, display.bid_size, display.ask, display.ask_size
    );
    println!("  axis [{}]", chart.axis_labels().join(" | "));
    match chart.placeholder_message() {
        Some(msg) => println!("  {}: {}", chart.period(), msg),
        None => println!("  {} path: {}", chart.period(), chart.line_path()),
    }
}

fn print_trades(state: &RenderState) {
    println!();
    match state {
        RenderState::Rows { rows, notice, .. } => {
            println!("Recent trades");
            for row in rows {
                println!(
                    "  {:>10}  {:>8}  {:>10}  {:>9}  {:>10}  {:<6} {} / {}",
                    row.time,
                    row.price,
                    row.change.text(),
                    row.change_percent.text(),
                    row.volume,
                    row.exchange,
                    row.buyer,
                    row.seller
                );
            }
            if let Some(n) = notice {
                println!("  {}", n);
            }
        }
        other => println!("Recent trades: {}", other.message().unwrap_or_default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), TickerError> {
    setup_logging();

    let path = std::env::args().nth(1);
    let config = TickerConfig::load(path.as_deref())?;
    let client = TickerClient::from_config(&config)?;
    tracing::info!(symbol = %client.symbol(), base_url = client.base_url(), "Watching feeds");

    let quote_poller = client.quotes().start_polling();
    let trade_poller = client.trades().start_polling();

    let mut chart = ChartView::new(Period::Day1);
    let mut seen_quote = 0;
    let mut seen_trades = 0;
    let mut redraw = tokio::time::interval(REDRAW_CHECK);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = redraw.tick() => {
                let quote_rev = client.quotes().revision().await;
                if quote_rev != seen_quote {
                    seen_quote = quote_rev;
                    let snapshot = client.quotes().snapshot().await;
                    chart.update(snapshot.as_deref());
                    print_quote(&QuoteDisplay::new(snapshot.as_deref()), &chart);
                }
                let trade_rev = client.trades().revision().await;
                if trade_rev != seen_trades {
                    seen_trades = trade_rev;
                    print_trades(&client.trades().render().await);
                }
            }
        }
    }

    QuotePoller::stop(quote_poller);
    TradePoller::stop(trade_poller);
    tracing::info!("Stopped");
    Ok(())
}
