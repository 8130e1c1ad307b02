/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Configured reqwest client and raw response bytes
[POS]:    HTTP layer - core client implementation and call dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, warn};

use crate::auth::{Credentials, RequestSigner};
use crate::http::{CexioError, Endpoint, FormParams, Result, Route};
use crate::types::OrderRequest;

/// Base URLs for CEX.IO API
const CEX_BASE_URL: &str = "https://cex.io/api/";
const GHASH_BASE_URL: &str = "https://cex.io/api/ghash.io/";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for CEX.IO API
#[derive(Debug)]
pub struct CexioClient {
    http_client: Client,
    cex_base_url: Url,
    ghash_base_url: Url,
    credentials: Option<Credentials>,
}

impl CexioClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, CEX_BASE_URL, GHASH_BASE_URL)
    }

    /// Create a new client against custom base URLs
    ///
    /// A missing trailing `/` is added so method names are appended to the path.
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        cex_base_url: &str,
        ghash_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            cex_base_url: parse_base_url(cex_base_url)?,
            ghash_base_url: parse_base_url(ghash_base_url)?,
            credentials: None,
        })
    }

    /// Set credentials for private requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Builder-style variant of [`CexioClient::set_credentials`]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Build full URL for an endpoint
    ///
    /// The pair is only used on the cex route, ghash URLs never carry it.
    /// Pairs with `.`/`..` segments or query/fragment characters are rejected,
    /// since `Url::join` would not keep them verbatim.
    pub fn endpoint_url(&self, endpoint: Endpoint, pair: Option<&str>) -> Result<Url> {
        let url = match endpoint.route() {
            Route::Cex => {
                let mut path = format!("{}/", endpoint.method_name());
                if let Some(pair) = pair.filter(|pair| !pair.is_empty()) {
                    validate_pair(pair)?;
                    path.push_str(pair);
                    path.push('/');
                }
                self.cex_base_url.join(&path)?
            }
            Route::Ghash => self.ghash_base_url.join(endpoint.method_name())?,
        };
        Ok(url)
    }

    /// GET `url` and return the body of a 200 reply
    pub async fn get_method(&self, url: Url) -> Result<Vec<u8>> {
        let response = self.http_client.get(url).send().await?;
        read_body(response).await
    }

    /// POST `form` to `url` and return the body of a 200 reply
    pub async fn post_method(&self, url: Url, form: &FormParams) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode())
            .send()
            .await?;
        read_body(response).await
    }

    /// Dispatch a call to `endpoint`
    ///
    /// Public endpoints are plain GETs. Private endpoints are signed with a
    /// fresh nonce and POSTed as a form; `id` and `order` only apply to them.
    pub async fn api_call(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        order: Option<&OrderRequest>,
        pair: Option<&str>,
    ) -> Result<Vec<u8>> {
        if !endpoint.is_private() {
            let url = self.endpoint_url(endpoint, pair)?;
            debug!(
                endpoint = %endpoint,
                verb = "GET",
                url = %url,
                private = false,
                "dispatching public call"
            );
            return self.get_method(url).await;
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CexioError::MissingCredentials {
                endpoint: endpoint.method_name(),
            })?;
        let url = self.endpoint_url(endpoint, pair)?;

        let (signature, nonce) = RequestSigner::new(credentials).signature();
        let form = FormParams::private(credentials.api_key(), &signature, &nonce, order, id);

        debug!(
            endpoint = %endpoint,
            verb = "POST",
            url = %url,
            private = true,
            fields = form.field_count(),
            "dispatching private call"
        );
        self.post_method(url, &form).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}

fn validate_pair(pair: &str) -> Result<()> {
    if pair.split('/').any(is_dot_segment) || pair.contains(['?', '#', '\\']) {
        return Err(CexioError::InvalidParameter(format!(
            "currency pair `{pair}` is not a plain path"
        )));
    }
    Ok(())
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    if status != StatusCode::OK {
        warn!(status = %status, url = %response.url(), "request rejected");
        return Err(CexioError::Status { status });
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn default_client() -> CexioClient {
        CexioClient::new().expect("client init")
    }

    #[rstest]
    #[case(Endpoint::Ticker, None, "https://cex.io/api/ticker/")]
    #[case(Endpoint::Ticker, Some("GHS/BTC"), "https://cex.io/api/ticker/GHS/BTC/")]
    #[case(Endpoint::OrderBook, Some(""), "https://cex.io/api/order_book/")]
    #[case(Endpoint::TradeHistory, Some("BTC/USD"), "https://cex.io/api/trade_history/BTC/USD/")]
    #[case(Endpoint::Balance, None, "https://cex.io/api/balance/")]
    #[case(Endpoint::OpenOrders, Some("GHS/BTC"), "https://cex.io/api/open_orders/GHS/BTC/")]
    #[case(Endpoint::PlaceOrder, Some("GHS/BTC"), "https://cex.io/api/place_order/GHS/BTC/")]
    #[case(Endpoint::CancelOrder, None, "https://cex.io/api/cancel_order/")]
    #[case(Endpoint::Hashrate, None, "https://cex.io/api/ghash.io/hashrate")]
    #[case(Endpoint::Workers, Some("GHS/BTC"), "https://cex.io/api/ghash.io/workers")]
    fn test_endpoint_url(
        #[case] endpoint: Endpoint,
        #[case] pair: Option<&str>,
        #[case] expected: &str,
    ) {
        let url = default_client()
            .endpoint_url(endpoint, pair)
            .expect("endpoint url");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case("..")]
    #[case(".")]
    #[case("GHS/../BTC")]
    #[case("GHS/BTC?x=1")]
    #[case("GHS#BTC")]
    #[case("%2e%2E")]
    #[case("GHS\\BTC")]
    fn test_endpoint_url_rejects_non_verbatim_pair(#[case] pair: &str) {
        let err = default_client()
            .endpoint_url(Endpoint::Ticker, Some(pair))
            .unwrap_err();
        assert!(matches!(err, CexioError::InvalidParameter(_)));
    }

    #[test]
    fn test_pair_ignored_on_ghash_route_is_not_validated() {
        let url = default_client()
            .endpoint_url(Endpoint::Hashrate, Some(".."))
            .expect("endpoint url");
        assert_eq!(url.as_str(), "https://cex.io/api/ghash.io/hashrate");
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = CexioClient::with_config_and_base_urls(
            ClientConfig::default(),
            "http://localhost:8080/api",
            "http://localhost:8080/ghash",
        )
        .expect("client init");

        let url = client.endpoint_url(Endpoint::Ticker, None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/ticker/");
        let url = client.endpoint_url(Endpoint::Workers, None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/ghash/workers");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = CexioClient::with_config_and_base_urls(ClientConfig::default(), "not a url", "")
            .unwrap_err();
        assert!(matches!(err, CexioError::UrlParse(_)));
    }

    #[tokio::test]
    async fn test_private_call_without_credentials() {
        let client = default_client();
        let err = client
            .api_call(Endpoint::Balance, None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CexioError::MissingCredentials {
                endpoint: "balance"
            }
        ));
        assert!(err.is_auth_error());
    }
}
