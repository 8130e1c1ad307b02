/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Raw response bytes from CEX.IO REST calls
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod mining;
pub mod public;
pub mod trade;

pub use error::{CexioError, Result};

pub use client::{CexioClient, ClientConfig};
pub use endpoint::{Endpoint, Route};
pub use form::FormParams;
