/*
[INPUT]:  API method selected by the caller
[OUTPUT]: Method name, privacy flag and host route per endpoint
[POS]:    HTTP layer - endpoint routing table
[UPDATE]: When adding endpoints or moving them between hosts
*/

use std::fmt;

/// Which base URL an endpoint is served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `https://cex.io/api/{method}/[{pair}/]`
    Cex,
    /// `https://cex.io/api/ghash.io/{method}`
    Ghash,
}

/// Fixed set of CEX.IO REST methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ticker,
    OrderBook,
    TradeHistory,
    Balance,
    OpenOrders,
    PlaceOrder,
    CancelOrder,
    Hashrate,
    Workers,
}

impl Endpoint {
    /// Path segment used in the request URL
    pub const fn method_name(self) -> &'static str {
        match self {
            Endpoint::Ticker => "ticker",
            Endpoint::OrderBook => "order_book",
            Endpoint::TradeHistory => "trade_history",
            Endpoint::Balance => "balance",
            Endpoint::OpenOrders => "open_orders",
            Endpoint::PlaceOrder => "place_order",
            Endpoint::CancelOrder => "cancel_order",
            Endpoint::Hashrate => "hashrate",
            Endpoint::Workers => "workers",
        }
    }

    /// Private endpoints are signed and sent as form POSTs
    pub const fn is_private(self) -> bool {
        !matches!(
            self,
            Endpoint::Ticker | Endpoint::OrderBook | Endpoint::TradeHistory
        )
    }

    pub const fn route(self) -> Route {
        match self {
            Endpoint::Hashrate | Endpoint::Workers => Route::Ghash,
            _ => Route::Cex,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
