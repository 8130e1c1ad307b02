/*
[INPUT]:  API username, key and secret
[OUTPUT]: HMAC-SHA256 request signatures and nonces
[POS]:    Auth layer - handles CEX.IO private API authentication
[UPDATE]: When credential sources or the signature scheme change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::{RequestSigner, hmac_sha256_upper_hex, nonce};
