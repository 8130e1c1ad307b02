/*
[INPUT]:  Username, API key and API secret (explicit, config file or environment)
[OUTPUT]: Credentials container used to sign private requests
[POS]:    Auth layer - account identity for private endpoints
[UPDATE]: When credential sources or environment variable names change
*/

use std::fmt;

use serde::Deserialize;

use crate::http::{CexioError, Result};

const USERNAME_ENV: &str = "CEXIO_USERNAME";
const API_KEY_ENV: &str = "CEXIO_API_KEY";
const API_SECRET_ENV: &str = "CEXIO_API_SECRET";

/// API credentials for private CEX.IO endpoints
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    username: String,
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create credentials from username, API key and API secret
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Looks for `CEXIO_USERNAME`, `CEXIO_API_KEY` and `CEXIO_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            read_env(USERNAME_ENV)?,
            read_env(API_KEY_ENV)?,
            read_env(API_SECRET_ENV)?,
        ))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

fn read_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|e| CexioError::Config(format!("environment variable {name}: {e}")))
}
