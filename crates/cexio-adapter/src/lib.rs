/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CEX.IO adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{CexioClient, CexioError, ClientConfig, Endpoint, FormParams, Result, Route};

// Re-export all types
pub use types::*;
