/*
[INPUT]:  Credentials
[OUTPUT]: Raw GHash.IO mining statistics bodies
[POS]:    HTTP layer - mining pool endpoints (require signature, ghash route)
[UPDATE]: When adding new mining pool endpoints
*/

use crate::http::{CexioClient, Endpoint, Result};

impl CexioClient {
    /// Pool hashrate for the account
    ///
    /// POST /api/ghash.io/hashrate
    pub async fn hashrate(&self) -> Result<Vec<u8>> {
        self.api_call(Endpoint::Hashrate, None, None, None).await
    }

    /// Per-worker statistics
    ///
    /// POST /api/ghash.io/workers
    pub async fn workers(&self) -> Result<Vec<u8>> {
        self.api_call(Endpoint::Workers, None, None, None).await
    }
}
