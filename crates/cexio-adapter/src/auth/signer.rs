/*
[INPUT]:  Credentials and a nonce (wall-clock nanoseconds)
[OUTPUT]: Upper-case hex HMAC-SHA256 signatures paired with their nonce
[POS]:    Auth layer - cryptographic signing for private requests
[UPDATE]: When changing the signed message layout or digest encoding
*/

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Current Unix time in nanoseconds, as a decimal string
pub fn nonce() -> String {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
        .to_string()
}

/// HMAC-SHA256 of `message` keyed by `secret`, hex encoded in upper case
pub fn hmac_sha256_upper_hex(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode_upper(mac.finalize().into_bytes())
}

/// Signs private requests with the account's API secret
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Sign with a fresh nonce
    ///
    /// Returns `(signature, nonce)`. The nonce must be sent alongside the
    /// signature, since it is part of the signed message.
    pub fn signature(&self) -> (String, String) {
        let nonce = nonce();
        let signature = self.sign_with_nonce(&nonce);
        (signature, nonce)
    }

    /// Sign `{nonce}{username}{api_key}` with the API secret
    pub fn sign_with_nonce(&self, nonce: &str) -> String {
        let message = format!(
            "{nonce}{}{}",
            self.credentials.username(),
            self.credentials.api_key()
        );
        hmac_sha256_upper_hex(&message, self.credentials.api_secret())
    }
}
