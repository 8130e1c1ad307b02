/*
[INPUT]:  Optional currency pair (e.g. "GHS/BTC")
[OUTPUT]: Raw market data bodies (ticker, order book, trade history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints
*/

use crate::http::{CexioClient, Endpoint, Result};

impl CexioClient {
    /// Ticker for a pair
    ///
    /// GET /api/ticker/{pair}/
    pub async fn ticker(&self, pair: Option<&str>) -> Result<Vec<u8>> {
        self.api_call(Endpoint::Ticker, None, None, pair).await
    }

    /// Order book for a pair
    ///
    /// GET /api/order_book/{pair}/
    pub async fn order_book(&self, pair: Option<&str>) -> Result<Vec<u8>> {
        self.api_call(Endpoint::OrderBook, None, None, pair).await
    }

    /// Recent trades for a pair
    ///
    /// GET /api/trade_history/{pair}/
    pub async fn trade_history(&self, pair: Option<&str>) -> Result<Vec<u8>> {
        self.api_call(Endpoint::TradeHistory, None, None, pair).await
    }
}
