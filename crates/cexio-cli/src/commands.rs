/*
[INPUT]:  Parsed subcommand and configured client
[OUTPUT]: Raw response body of the selected endpoint
[POS]:    CLI layer - maps subcommands onto client calls
[UPDATE]: When endpoints are added to the client
*/

use clap::Subcommand;
use rust_decimal::Decimal;

use cexio_adapter::{CexioClient, Result, Side};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Ticker for a currency pair (e.g. GHS/BTC)
    Ticker { pair: Option<String> },
    /// Order book for a currency pair
    OrderBook { pair: Option<String> },
    /// Recent trades for a currency pair
    TradeHistory { pair: Option<String> },
    /// Account balance
    Balance,
    /// Open orders for a currency pair
    OpenOrders { pair: Option<String> },
    /// Place a limit order
    PlaceLimit {
        side: Side,
        amount: Decimal,
        price: Decimal,
        pair: Option<String>,
    },
    /// Place a market order
    PlaceMarket {
        side: Side,
        amount: Decimal,
        pair: Option<String>,
    },
    /// Cancel an order by id
    Cancel { id: String },
    /// GHash.IO hashrate
    Hashrate,
    /// GHash.IO worker statistics
    Workers,
}

impl Command {
    pub async fn execute(&self, client: &CexioClient) -> Result<Vec<u8>> {
        match self {
            Command::Ticker { pair } => client.ticker(pair.as_deref()).await,
            Command::OrderBook { pair } => client.order_book(pair.as_deref()).await,
            Command::TradeHistory { pair } => client.trade_history(pair.as_deref()).await,
            Command::Balance => client.balance().await,
            Command::OpenOrders { pair } => client.open_orders(pair.as_deref()).await,
            Command::PlaceLimit {
                side,
                amount,
                price,
                pair,
            } => {
                client
                    .place_limit_order(*side, *amount, *price, pair.as_deref())
                    .await
            }
            Command::PlaceMarket { side, amount, pair } => {
                client
                    .place_market_order(*side, *amount, pair.as_deref())
                    .await
            }
            Command::Cancel { id } => client.cancel_order(id).await,
            Command::Hashrate => client.hashrate().await,
            Command::Workers => client.workers().await,
        }
    }
}
