/*
[INPUT]:  Currency pair (e.g., "GHS/BTC")
[OUTPUT]: Raw market data bodies (ticker, order book, trade history)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use cexio_adapter::*;

/// Example: Query market data (no credentials required)
#[tokio::main]
async fn main() {
    println!("=== CEX.IO Market Data Example ===\n");

    let client = match CexioClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "GHS/BTC";

    println!("Querying ticker for {}...", pair);
    match client.ticker(Some(pair)).await {
        Ok(body) => println!("Ticker: {}", String::from_utf8_lossy(&body)),
        Err(e) => println!("Error: {}", e),
    }

    println!("\nQuerying order book for {}...", pair);
    match client.order_book(Some(pair)).await {
        Ok(body) => println!("Order book: {} bytes", body.len()),
        Err(e) => println!("Error: {}", e),
    }

    println!("\nQuerying trade history for {}...", pair);
    match client.trade_history(Some(pair)).await {
        Ok(body) => println!("Trade history: {} bytes", body.len()),
        Err(e) => println!("Error: {}", e),
    }

    // Private calls need CEXIO_USERNAME, CEXIO_API_KEY and CEXIO_API_SECRET
    if let Ok(credentials) = Credentials::from_env() {
        let client = client.with_credentials(credentials);
        println!("\nQuerying balance...");
        match client.balance().await {
            Ok(body) => println!("Balance: {}", String::from_utf8_lossy(&body)),
            Err(e) => println!("Error: {}", e),
        }
    }
}
