/*
[INPUT]:  Credentials and optional currency pair
[OUTPUT]: Raw account bodies (balance, open orders)
[POS]:    HTTP layer - account endpoints (require signature)
[UPDATE]: When adding new account endpoints
*/

use crate::http::{CexioClient, Endpoint, Result};

impl CexioClient {
    /// Account balance
    ///
    /// POST /api/balance/
    pub async fn balance(&self) -> Result<Vec<u8>> {
        self.api_call(Endpoint::Balance, None, None, None).await
    }

    /// Open orders for a pair
    ///
    /// POST /api/open_orders/{pair}/
    pub async fn open_orders(&self, pair: Option<&str>) -> Result<Vec<u8>> {
        self.api_call(Endpoint::OpenOrders, None, None, pair).await
    }
}
