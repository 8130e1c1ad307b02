/*
[INPUT]:  Order side, amount, price, pair or order id
[OUTPUT]: Raw order placement and cancellation bodies
[POS]:    HTTP layer - trading endpoints (require signature)
[UPDATE]: When adding new trading endpoints or changing order fields
*/

use rust_decimal::Decimal;

use crate::http::{CexioClient, Endpoint, Result};
use crate::types::{OrderRequest, Side};

impl CexioClient {
    /// Place a limit order
    ///
    /// POST /api/place_order/{pair}/
    /// Form: order_type=limit, type, amount, price
    pub async fn place_limit_order(
        &self,
        side: Side,
        amount: Decimal,
        price: Decimal,
        pair: Option<&str>,
    ) -> Result<Vec<u8>> {
        let order = OrderRequest::limit(side, amount, price);
        self.place_order(&order, pair).await
    }

    /// Place a market order
    ///
    /// POST /api/place_order/{pair}/
    /// Form: order_type=market, type, amount
    pub async fn place_market_order(
        &self,
        side: Side,
        amount: Decimal,
        pair: Option<&str>,
    ) -> Result<Vec<u8>> {
        let order = OrderRequest::market(side, amount);
        self.place_order(&order, pair).await
    }

    /// Place an order described by `order`
    pub async fn place_order(&self, order: &OrderRequest, pair: Option<&str>) -> Result<Vec<u8>> {
        self.api_call(Endpoint::PlaceOrder, None, Some(order), pair)
            .await
    }

    /// Cancel an order by id
    ///
    /// POST /api/cancel_order/
    /// Form: id
    pub async fn cancel_order(&self, id: &str) -> Result<Vec<u8>> {
        self.api_call(Endpoint::CancelOrder, Some(id), None, None)
            .await
    }
}
